// ABOUTME: Static option catalogs for every questionnaire select field
// ABOUTME: Shared value/label tables used for labels, lookups, and validation

use serde::Serialize;

/// One selectable value of a questionnaire field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

const fn opt(value: &'static str, label: &'static str) -> CatalogOption {
    CatalogOption {
        value,
        label,
        description: None,
    }
}

const fn described(
    value: &'static str,
    label: &'static str,
    description: &'static str,
) -> CatalogOption {
    CatalogOption {
        value,
        label,
        description: Some(description),
    }
}

pub const DIFFICULTY: &[CatalogOption] = &[
    opt("beginner", "Beginner"),
    opt("advanced", "Advanced"),
    opt("expert", "Expert"),
];

pub const DESIGN_VIBES: &[CatalogOption] = &[
    described("modern-minimal", "Modern & Minimal", "Clean, sleek, with generous white space"),
    described("bold-playful", "Bold & Playful", "Vibrant colors, creative, energetic"),
    described("corporate-professional", "Corporate & Professional", "Polished, trustworthy, business-focused"),
    described("futuristic-cyberpunk", "Futuristic & Cyberpunk", "Dark, neon, tech-forward"),
    described("warm-natural", "Warm & Natural", "Organic, earthy, approachable"),
    described("dark-moody", "Dark & Moody", "Sophisticated, dramatic, intense"),
    described("retro-vintage", "Retro & Vintage", "Nostalgic, classic, timeless"),
    described("luxury-premium", "Luxury & Premium", "Elegant, exclusive, high-end"),
];

pub const TYPOGRAPHY: &[CatalogOption] = &[
    described("inter", "Clean/Sans-serif (Inter)", "Modern, readable, neutral"),
    described("geist", "Geist", "Clean, tech-focused, modern"),
    described("cabinet-grotesk", "Condensed/Bold (Cabinet Grotesk)", "Bold, impactful, unique"),
    described("playfair", "Elegant/Serif (Playfair)", "Sophisticated, editorial, premium"),
    described("jetbrains", "Tech/Mono (JetBrains Mono)", "Technical, precise, developer-focused"),
];

pub const BRAND_VOICE: &[CatalogOption] = &[
    described("professional", "Professional", "Formal, trustworthy, authoritative"),
    described("friendly", "Friendly", "Approachable, warm, conversational"),
    described("quirky", "Quirky", "Playful, unique, memorable"),
    described("authoritative", "Authoritative", "Expert, confident, direct"),
    described("casual", "Casual", "Relaxed, informal, relatable"),
    described("technical", "Technical", "Precise, detailed, jargon-friendly"),
];

pub const BACKGROUND_STYLE: &[CatalogOption] = &[
    opt("gradient", "Gradient"),
    opt("solid", "Solid Color"),
    opt("pattern", "Pattern / Texture"),
    opt("animated", "Animated / Moving"),
];

pub const CATEGORY: &[CatalogOption] = &[
    opt("landing-page", "Landing Page / Marketing Site"),
    opt("web-app-saas", "Web App / SaaS"),
    opt("internal-tool", "Internal Tool"),
    opt("ecommerce", "E-commerce Store"),
    opt("portfolio", "Portfolio / Showcase"),
    opt("blog-app", "Blog + App Hybrid"),
    opt("marketplace", "Marketplace"),
    opt("dashboard", "Dashboard / Analytics"),
    opt("other", "Other"),
];

pub const AUTH_TYPE: &[CatalogOption] = &[
    opt("none", "None (Public access)"),
    opt("email-password", "Email + Password"),
    opt("magic-link", "Magic Link (email-based)"),
    opt("oauth", "OAuth (Google, GitHub, etc.)"),
    opt("social-login", "Social Media Login"),
];

pub const AUTH_PROVIDER: &[CatalogOption] = &[
    described("clerk", "Clerk (Recommended)", "User authentication, fast setup"),
    described("supabase", "Supabase Auth", "Open-source, includes database"),
    described("auth0", "Auth0", "Enterprise-grade, comprehensive"),
    described("nextauth", "NextAuth.js", "Custom, flexible, open-source"),
    described("custom", "Custom Implementation", "Full control, more work"),
];

pub const TEAM_STRUCTURE: &[CatalogOption] = &[
    opt("single-user", "Single User"),
    opt("multi-user-shared", "Multi-user with shared data"),
    opt("team-workspaces", "Team-based workspaces"),
    opt("organization-hierarchy", "Organization hierarchy"),
];

pub const SCALABILITY: &[CatalogOption] = &[
    opt("mvp", "MVP/Prototype (1-10 users)"),
    opt("beta", "Beta (10-100 users)"),
    opt("production", "Production (100-1000 users)"),
    opt("enterprise", "Enterprise (1000+ users)"),
];

pub const MONETIZATION: &[CatalogOption] = &[
    opt("free", "Free (No monetization)"),
    opt("freemium", "Freemium (Free + Paid tiers)"),
    opt("subscription", "Subscription (Monthly/Yearly)"),
    opt("one-time", "One-time Purchase"),
    opt("usage-based", "Usage-based Pricing"),
    opt("ads", "Advertisement-supported"),
];

pub const DATABASE: &[CatalogOption] = &[
    opt("supabase", "Supabase (PostgreSQL + Realtime)"),
    opt("postgresql", "PostgreSQL (Self-hosted)"),
    opt("firebase", "Firebase Firestore"),
    opt("mongodb", "MongoDB Atlas"),
    opt("planetscale", "PlanetScale (MySQL serverless)"),
    opt("prisma", "Prisma ORM (with PostgreSQL/MySQL)"),
];

pub const STORAGE: &[CatalogOption] = &[
    opt("s3", "AWS S3"),
    opt("cloudinary", "Cloudinary"),
    opt("supabase-storage", "Supabase Storage"),
    opt("firebase-storage", "Firebase Storage"),
];

pub const REALTIME: &[CatalogOption] = &[
    opt("supabase-realtime", "Supabase Realtime"),
    opt("pusher", "Pusher"),
    opt("socket.io", "Socket.io"),
    opt("firebase-realtime", "Firebase Realtime Database"),
];

pub const CALENDAR: &[CatalogOption] = &[
    opt("cal-api", "Cal.com API"),
    opt("google-calendar", "Google Calendar API"),
    opt("custom-db", "Custom Database Logic"),
];

pub const EMAIL: &[CatalogOption] = &[
    opt("resend", "Resend"),
    opt("sendgrid", "SendGrid"),
    opt("novu", "Novu (Multi-channel)"),
    opt("ses", "Amazon SES"),
];

pub const PAYMENT: &[CatalogOption] = &[
    opt("stripe", "Stripe"),
    opt("paypal", "PayPal"),
    opt("paddle", "Paddle"),
];

pub const NAVIGATION: &[CatalogOption] = &[
    opt("top-nav", "Top Navigation Bar"),
    opt("sidebar", "Sidebar Navigation"),
    opt("bottom-nav", "Bottom Navigation (Mobile)"),
    opt("hamburger", "Hamburger Menu"),
    opt("mixed", "Mixed (Desktop: Sidebar, Mobile: Bottom Nav)"),
];

pub const HERO_IMAGE_STYLE: &[CatalogOption] = &[
    opt("illustration", "Illustration"),
    opt("screenshot", "Screenshot / Mockup"),
    opt("gradient", "Gradient / Abstract"),
    opt("3d", "3D Graphics"),
    opt("photo", "Photography"),
    opt("video", "Video Background"),
];

pub const DEPLOYMENT: &[CatalogOption] = &[
    described("vercel", "Vercel (Recommended)", "Optimized for Next.js, fast deployments"),
    described("netlify", "Netlify", "Great for static sites, free tier"),
    described("aws", "AWS / Cloud Provider", "Full control, scalable"),
    described("self-hosted", "Self-hosted (Docker)", "Maximum control, requires maintenance"),
];

pub const LOADING_PREFERENCE: &[CatalogOption] = &[
    opt("skeletons", "Skeletons (Skeleton Loading)"),
    opt("spinners", "Spinners (Traditional Loading)"),
    opt("progressive", "Progressive (Content Loads Gradually)"),
];

pub const MOBILE_DESKTOP: &[CatalogOption] = &[
    opt("mobile-first", "Mobile-First"),
    opt("desktop-first", "Desktop-First"),
];

pub const UI_COMPONENTS: &[CatalogOption] = &[
    opt("pricing-tables", "Pricing Tables"),
    opt("feature-grids", "Feature Grids"),
    opt("testimonials", "Testimonials Carousel"),
    opt("faq-accordion", "FAQ Accordion"),
    opt("newsletter", "Newsletter Signup"),
    opt("dark-mode-toggle", "Dark Mode Toggle"),
    opt("command-palette", "Command Palette (Cmd+K)"),
    opt("search", "Search Functionality"),
    opt("user-settings", "User Settings Panel"),
    opt("notifications", "Notification Center"),
    opt("onboarding", "Onboarding Flow"),
    opt("team-invite", "Team Invitation System"),
];

pub const ANIMATION: &[CatalogOption] = &[
    opt("micro-interactions", "Micro-interactions (Hover, Focus)"),
    opt("page-transitions", "Page Transitions"),
    opt("scroll-animations", "Scroll Animations"),
    opt("hero-animations", "Hero Section Animations"),
    opt("none", "No Animations (Reduced Motion)"),
];

pub const ACCESSIBILITY: &[CatalogOption] = &[
    opt("wcag-aa", "WCAG AA Compliance"),
    opt("keyboard-nav", "Full Keyboard Navigation"),
    opt("screen-reader", "Screen Reader Support"),
    opt("high-contrast", "High Contrast Mode"),
    opt("reduced-motion", "Reduced Motion Support"),
];

pub const PERFORMANCE: &[CatalogOption] = &[
    opt("instant", "Must Feel Instant"),
    opt("lighthouse-95", "Lighthouse Score 95+"),
    opt("seo-optimized", "SEO Optimized"),
    opt("fast-loading", "Fast Loading (Under 2s)"),
];

pub const SEO: &[CatalogOption] = &[
    opt("meta-tags", "Meta Tags (Title, Description)"),
    opt("sitemap", "XML Sitemap"),
    opt("robots-txt", "robots.txt"),
    opt("structured-data", "Structured Data (Schema.org)"),
    opt("og-tags", "Open Graph Tags (Social Media)"),
];

pub const SOCIAL_MEDIA: &[CatalogOption] = &[
    opt("twitter", "Twitter / X"),
    opt("linkedin", "LinkedIn"),
    opt("facebook", "Facebook"),
    opt("instagram", "Instagram"),
    opt("share-buttons", "Social Share Buttons"),
];

pub const TESTING: &[CatalogOption] = &[
    opt("unit", "Unit Tests"),
    opt("integration", "Integration Tests"),
    opt("e2e", "End-to-End Tests (Playwright/Cypress)"),
    opt("visual", "Visual Regression Tests"),
];

pub const ERROR_TRACKING: &[CatalogOption] = &[
    opt("sentry", "Sentry"),
    opt("logrocket", "LogRocket"),
    opt("custom", "Custom Error Logging"),
];

pub const ANALYTICS: &[CatalogOption] = &[
    opt("posthog", "PostHog"),
    opt("mixpanel", "Mixpanel"),
    opt("amplitude", "Amplitude"),
    opt("ga4", "Google Analytics 4"),
];

pub const CICD: &[CatalogOption] = &[
    opt("github-actions", "GitHub Actions"),
    opt("vercel-ci", "Vercel CI/CD"),
    opt("jenkins", "Jenkins"),
];

pub const SECURITY: &[CatalogOption] = &[
    opt("gdpr", "GDPR Compliance"),
    opt("hipaa", "HIPAA Compliance"),
    opt("soc2", "SOC 2 Compliance"),
    opt("encryption", "Data Encryption (At Rest & In Transit)"),
    opt("auth", "Secure Authentication"),
];

pub const IMAGE_OPTIMIZATION: &[CatalogOption] = &[
    opt("next-image", "Next.js Image Component"),
    opt("webp", "WebP Format"),
    opt("lazy-load", "Lazy Loading"),
    opt("responsive", "Responsive Images"),
];

/// Catalog names paired with their tables, in questionnaire order
pub const ALL_CATALOGS: &[(&str, &[CatalogOption])] = &[
    ("difficulty", DIFFICULTY),
    ("designVibe", DESIGN_VIBES),
    ("typography", TYPOGRAPHY),
    ("brandVoice", BRAND_VOICE),
    ("backgroundStyle", BACKGROUND_STYLE),
    ("category", CATEGORY),
    ("authType", AUTH_TYPE),
    ("authProvider", AUTH_PROVIDER),
    ("teamStructure", TEAM_STRUCTURE),
    ("scalability", SCALABILITY),
    ("monetization", MONETIZATION),
    ("databasePreference", DATABASE),
    ("storageSolution", STORAGE),
    ("realtimeSolution", REALTIME),
    ("calendarIntegration", CALENDAR),
    ("emailNotifications", EMAIL),
    ("paymentIntegration", PAYMENT),
    ("navigationStructure", NAVIGATION),
    ("heroImageStyle", HERO_IMAGE_STYLE),
    ("keyUiComponents", UI_COMPONENTS),
    ("seoRequirements", SEO),
    ("socialMediaIntegration", SOCIAL_MEDIA),
    ("mobileDesktop", MOBILE_DESKTOP),
    ("animationPreferences", ANIMATION),
    ("loadingPreference", LOADING_PREFERENCE),
    ("accessibilityRequirements", ACCESSIBILITY),
    ("performanceGoals", PERFORMANCE),
    ("imageOptimization", IMAGE_OPTIMIZATION),
    ("deploymentTarget", DEPLOYMENT),
    ("cicdRequirements", CICD),
    ("testingStrategy", TESTING),
    ("errorTracking", ERROR_TRACKING),
    ("analyticsIntegration", ANALYTICS),
    ("securityRequirements", SECURITY),
];

/// Look up a catalog by its field name (camelCase, as in the answer JSON)
pub fn catalog(name: &str) -> Option<&'static [CatalogOption]> {
    ALL_CATALOGS
        .iter()
        .find(|(catalog_name, _)| *catalog_name == name)
        .map(|(_, options)| *options)
}

pub fn find(options: &'static [CatalogOption], value: &str) -> Option<&'static CatalogOption> {
    options.iter().find(|o| o.value == value)
}

pub fn is_known(options: &[CatalogOption], value: &str) -> bool {
    options.iter().any(|o| o.value == value)
}

/// Human label for a value, falling back to the raw value when it is not catalogued
pub fn label_for<'a>(options: &'static [CatalogOption], value: &'a str) -> &'a str {
    match find(options, value) {
        Some(option) => option.label,
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_lookup_by_field_name() {
        assert_eq!(catalog("category").map(|c| c.len()), Some(9));
        assert_eq!(catalog("seoRequirements").map(|c| c.len()), Some(5));
        assert!(catalog("favouriteColour").is_none());
    }

    #[test]
    fn test_label_falls_back_to_raw_value() {
        assert_eq!(label_for(AUTH_PROVIDER, "clerk"), "Clerk (Recommended)");
        assert_eq!(label_for(AUTH_PROVIDER, "okta"), "okta");
    }

    #[test]
    fn test_catalog_values_are_unique() {
        for (name, options) in ALL_CATALOGS {
            let unique: HashSet<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(unique.len(), options.len(), "duplicate value in {}", name);
        }
    }

    #[test]
    fn test_is_known() {
        assert!(is_known(STORAGE, "cloudinary"));
        assert!(!is_known(STORAGE, ""));
    }
}
