//! Website category table.
//!
//! Every category the classifier can produce, with its display name, the
//! keywords that select it, and the features and extra technologies it puts
//! into a brief. Rules are listed in priority order: when a text matches
//! several rules, the first one wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frontend/backend pair recommended for every brief.
pub const BASE_TECHNOLOGIES: &[&str] = &["Vue.js", "Laravel"];

/// Detected website category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Fallback when no keyword matches
    General,
    /// Shops, carts, payments
    Ecommerce,
    /// Blogs, articles, news
    Content,
    /// Personal work showcases
    Portfolio,
    /// Communities, forums, chat
    Social,
    /// Recipes and cooking
    Recipe,
    /// Dashboards and reporting
    Analytics,
    /// Reservations and appointments
    Booking,
    /// Marketing landing pages
    Landing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.descriptor().display_name)
    }
}

impl Category {
    /// Machine-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Ecommerce => "ecommerce",
            Category::Content => "content",
            Category::Portfolio => "portfolio",
            Category::Social => "social",
            Category::Recipe => "recipe",
            Category::Analytics => "analytics",
            Category::Booking => "booking",
            Category::Landing => "landing",
        }
    }

    /// Static descriptor for this category
    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        match self {
            Category::General => &GENERAL,
            Category::Ecommerce => &ECOMMERCE,
            Category::Content => &CONTENT,
            Category::Portfolio => &PORTFOLIO,
            Category::Social => &SOCIAL,
            Category::Recipe => &RECIPE,
            Category::Analytics => &ANALYTICS,
            Category::Booking => &BOOKING,
            Category::Landing => &LANDING,
        }
    }
}

/// Static data attached to a category.
#[derive(Debug)]
pub struct CategoryDescriptor {
    pub category: Category,
    /// Name used in the brief ("e-commerce platform")
    pub display_name: &'static str,
    /// Whole-word keywords that select this category (empty for the fallback)
    pub keywords: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Technologies appended after [`BASE_TECHNOLOGIES`]
    pub technologies: &'static [&'static str],
}

pub static GENERAL: CategoryDescriptor = CategoryDescriptor {
    category: Category::General,
    display_name: "general website",
    keywords: &[],
    features: &[
        "Responsive design",
        "User authentication",
        "Database integration",
        "RESTful API",
        "Modern UI",
    ],
    technologies: &[],
};

pub static ECOMMERCE: CategoryDescriptor = CategoryDescriptor {
    category: Category::Ecommerce,
    display_name: "e-commerce platform",
    keywords: &[
        "shop",
        "store",
        "ecommerce",
        "e-commerce",
        "product",
        "cart",
        "checkout",
        "payment",
    ],
    features: &[
        "Product catalog",
        "Shopping cart",
        "Secure checkout",
        "Payment integration",
        "Order management",
    ],
    technologies: &["Stripe/PayPal"],
};

pub static CONTENT: CategoryDescriptor = CategoryDescriptor {
    category: Category::Content,
    display_name: "content management system",
    keywords: &["blog", "article", "content", "post", "cms", "news"],
    features: &[
        "Rich text editor",
        "Category management",
        "Tag system",
        "Comment functionality",
        "SEO optimization",
    ],
    technologies: &[],
};

pub static PORTFOLIO: CategoryDescriptor = CategoryDescriptor {
    category: Category::Portfolio,
    display_name: "portfolio website",
    keywords: &["portfolio", "showcase", "work", "project"],
    features: &[
        "Project gallery",
        "Image optimization",
        "Filtering system",
        "Contact form",
        "Responsive design",
    ],
    technologies: &[],
};

pub static SOCIAL: CategoryDescriptor = CategoryDescriptor {
    category: Category::Social,
    display_name: "social platform",
    keywords: &["social", "community", "forum", "chat", "message", "network"],
    features: &[
        "User authentication",
        "Real-time messaging",
        "User profiles",
        "Activity feed",
        "Notifications",
    ],
    technologies: &["Laravel WebSockets"],
};

pub static RECIPE: CategoryDescriptor = CategoryDescriptor {
    category: Category::Recipe,
    display_name: "recipe application",
    keywords: &["recipe", "food", "cooking", "meal", "ingredient"],
    features: &[
        "Recipe database",
        "Search and filter",
        "Ingredient lists",
        "Step-by-step instructions",
        "User ratings",
    ],
    technologies: &[],
};

pub static ANALYTICS: CategoryDescriptor = CategoryDescriptor {
    category: Category::Analytics,
    display_name: "analytics dashboard",
    keywords: &[
        "dashboard",
        "analytics",
        "chart",
        "graph",
        "report",
        "metric",
        "data",
    ],
    features: &[
        "Data visualization",
        "Real-time updates",
        "Export functionality",
        "Custom reports",
        "Interactive charts",
    ],
    technologies: &["Chart.js"],
};

pub static BOOKING: CategoryDescriptor = CategoryDescriptor {
    category: Category::Booking,
    display_name: "booking system",
    keywords: &["book", "booking", "reservation", "appointment", "schedule"],
    features: &[
        "Calendar integration",
        "Availability management",
        "Email notifications",
        "Payment processing",
        "Booking confirmation",
    ],
    technologies: &[],
};

pub static LANDING: CategoryDescriptor = CategoryDescriptor {
    category: Category::Landing,
    display_name: "landing page",
    keywords: &["landing", "hero", "promote", "marketing", "campaign"],
    features: &[
        "Hero section",
        "Call-to-action buttons",
        "Lead capture form",
        "Social proof",
        "Mobile responsive",
    ],
    technologies: &[],
};

/// Keyword rules in priority order. First match wins.
pub static CATEGORY_RULES: [&CategoryDescriptor; 8] = [
    &ECOMMERCE, &CONTENT, &PORTFOLIO, &SOCIAL, &RECIPE, &ANALYTICS, &BOOKING, &LANDING,
];
