// ABOUTME: SEO completeness scoring for the planned site
// ABOUTME: Penalty checklist with a letter grade, plus prioritized recommendations, tips, and a checklist view

use crate::types::Severity;
use architect_core::utils::{char_len, contains_value};
use architect_core::{AnswerRecord, ProductCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const PERFECT_SCORE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeoGrade {
    A,
    B,
    C,
    D,
    F,
}

impl SeoGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => SeoGrade::A,
            80..=89 => SeoGrade::B,
            70..=79 => SeoGrade::C,
            60..=69 => SeoGrade::D,
            _ => SeoGrade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeoGrade::A => "A",
            SeoGrade::B => "B",
            SeoGrade::C => "C",
            SeoGrade::D => "D",
            SeoGrade::F => "F",
        }
    }
}

impl fmt::Display for SeoGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub category: String,
    pub description: String,
    pub impact: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// 0 to 100
    pub score: u8,
    pub grade: SeoGrade,
    /// Highest impact first
    pub issues: Vec<SeoIssue>,
}

/// One checklist entry; `fails` decides whether the penalty applies
struct SeoCriterion {
    category: &'static str,
    description: &'static str,
    impact: Severity,
    penalty: i32,
    fails: fn(&AnswerRecord) -> bool,
}

const CRITERIA: &[SeoCriterion] = &[
    SeoCriterion {
        category: "Meta Tags",
        description: "Meta tags missing (title, description)",
        impact: Severity::High,
        penalty: 15,
        fails: |r| !r.requires_seo("meta-tags"),
    },
    SeoCriterion {
        category: "Sitemap",
        description: "XML sitemap missing",
        impact: Severity::Medium,
        penalty: 10,
        fails: |r| !r.requires_seo("sitemap"),
    },
    SeoCriterion {
        category: "Robots.txt",
        description: "robots.txt missing",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| !r.requires_seo("robots-txt"),
    },
    SeoCriterion {
        category: "Structured Data",
        description: "Schema.org structured data missing",
        impact: Severity::Medium,
        penalty: 10,
        fails: |r| !r.requires_seo("structured-data"),
    },
    SeoCriterion {
        category: "Open Graph",
        description: "Open Graph tags missing (social sharing)",
        impact: Severity::Medium,
        penalty: 10,
        fails: |r| !r.requires_seo("og-tags"),
    },
    SeoCriterion {
        category: "Performance",
        description: "Lighthouse 95+ target not set",
        impact: Severity::Medium,
        penalty: 10,
        fails: |r| !contains_value(&r.performance_goals, "lighthouse-95"),
    },
    SeoCriterion {
        category: "Performance",
        description: "SEO optimization not explicitly requested",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| !contains_value(&r.performance_goals, "seo-optimized"),
    },
    SeoCriterion {
        category: "Image Optimization",
        description: "WebP format not specified",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| !contains_value(&r.image_optimization, "webp"),
    },
    SeoCriterion {
        category: "Accessibility",
        description: "WCAG AA compliance not specified",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| !contains_value(&r.accessibility_requirements, "wcag-aa"),
    },
    SeoCriterion {
        category: "Content",
        description: "Hero headline too short or missing",
        impact: Severity::High,
        penalty: 10,
        fails: |r| char_len(&r.hero_headline) < 10,
    },
    SeoCriterion {
        category: "Content",
        description: "Hero headline too long",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| char_len(&r.hero_headline) > 100,
    },
    SeoCriterion {
        category: "Content",
        description: "App name too short",
        impact: Severity::High,
        penalty: 10,
        fails: |r| char_len(&r.app_name) < 2,
    },
    SeoCriterion {
        category: "Content",
        description: "App name too long for SEO",
        impact: Severity::Medium,
        penalty: 5,
        fails: |r| char_len(&r.app_name) > 50,
    },
    SeoCriterion {
        category: "Content",
        description: "Tagline too short for SEO",
        impact: Severity::Medium,
        penalty: 5,
        fails: |r| char_len(&r.tagline) < 10,
    },
    SeoCriterion {
        category: "Content",
        description: "Tagline too long for SEO (ideal: 50-150 chars)",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| char_len(&r.tagline) > 150,
    },
    SeoCriterion {
        category: "User Experience",
        description: "E-commerce sites benefit from search functionality",
        impact: Severity::Medium,
        penalty: 5,
        fails: |r| r.category == ProductCategory::Ecommerce && !r.has_ui_component("search"),
    },
    SeoCriterion {
        category: "Social Signals",
        description: "Portfolios benefit from social media integration",
        impact: Severity::Low,
        penalty: 5,
        fails: |r| r.category == ProductCategory::Portfolio && r.social_media_integration.is_empty(),
    },
];

pub fn score_seo(record: &AnswerRecord) -> SeoScore {
    let mut score = PERFECT_SCORE;
    let mut issues = Vec::new();

    for criterion in CRITERIA.iter().filter(|c| (c.fails)(record)) {
        score -= criterion.penalty;
        issues.push(SeoIssue {
            category: criterion.category.to_string(),
            description: criterion.description.to_string(),
            impact: criterion.impact,
        });
    }

    // Clamped once, after every penalty
    let score = score.clamp(0, PERFECT_SCORE) as u8;
    issues.sort_by_key(|issue| issue.impact);
    let grade = SeoGrade::from_score(score);

    debug!(score, grade = %grade, issues = issues.len(), "Scored SEO readiness");

    SeoScore {
        score,
        grade,
        issues,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoRecommendation {
    pub priority: Severity,
    pub recommendation: &'static str,
}

pub fn seo_recommendations(record: &AnswerRecord) -> Vec<SeoRecommendation> {
    let checks: [(bool, Severity, &'static str); 9] = [
        (
            record.requires_seo("meta-tags"),
            Severity::High,
            "Add meta tags (title, description, keywords)",
        ),
        (
            record.requires_seo("structured-data"),
            Severity::High,
            "Implement Schema.org structured data for rich snippets",
        ),
        (
            record.requires_seo("og-tags"),
            Severity::High,
            "Add Open Graph tags for better social sharing",
        ),
        (
            record.requires_seo("sitemap"),
            Severity::Medium,
            "Create XML sitemap and submit to Google Search Console",
        ),
        (
            record.requires_seo("robots-txt"),
            Severity::Medium,
            "Add robots.txt to control crawler access",
        ),
        (
            contains_value(&record.performance_goals, "lighthouse-95"),
            Severity::Medium,
            "Optimize for Lighthouse score 95+ (Core Web Vitals)",
        ),
        (
            contains_value(&record.image_optimization, "webp"),
            Severity::Low,
            "Use WebP format for better image compression",
        ),
        (
            contains_value(&record.image_optimization, "next-image"),
            Severity::Low,
            "Use Next.js Image component for automatic optimization",
        ),
        (
            contains_value(&record.accessibility_requirements, "wcag-aa"),
            Severity::Low,
            "Ensure WCAG AA compliance for better SEO ranking",
        ),
    ];

    checks
        .into_iter()
        .filter(|(satisfied, _, _)| !satisfied)
        .map(|(_, priority, recommendation)| SeoRecommendation {
            priority,
            recommendation,
        })
        .collect()
}

const GENERAL_TIPS: &[&str] = &[
    "Write descriptive, unique meta titles (50-60 characters)",
    "Create compelling meta descriptions (150-160 characters)",
    "Use semantic HTML (header, nav, main, article, footer)",
    "Optimize images with alt text and proper dimensions",
    "Use descriptive URLs (e.g., /products/blue-widgets)",
    "Create descriptive, keyword-rich headings (H1, H2, etc.)",
    "Add internal links to related content",
    "Ensure mobile-friendly design (responsive)",
    "Improve page load speed (under 2.5 seconds)",
    "Add canonical URLs to prevent duplicate content",
];

/// General on-page tips followed by category-specific ones
pub fn seo_tips(record: &AnswerRecord) -> Vec<&'static str> {
    let specific: &[&str] = match record.category {
        ProductCategory::Ecommerce => &[
            "Add product reviews for user-generated content",
            "Implement breadcrumb navigation",
            "Add schema markup for products (price, availability, reviews)",
        ],
        ProductCategory::BlogApp => &[
            "Add author bios and bylines",
            "Implement publish date and last modified dates",
            "Add article schema for better search results",
        ],
        ProductCategory::Portfolio => &[
            "Add project descriptions with keywords",
            "Include case studies with results",
            "Add testimonials for social proof",
        ],
        _ => &[],
    };

    GENERAL_TIPS.iter().chain(specific).copied().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub checked: bool,
    pub item: &'static str,
    pub category: &'static str,
}

pub fn seo_checklist(record: &AnswerRecord) -> Vec<ChecklistItem> {
    let item = |checked, item, category| ChecklistItem {
        checked,
        item,
        category,
    };

    vec![
        item(record.requires_seo("meta-tags"), "Meta tags (title, description)", "Basic"),
        item(record.requires_seo("og-tags"), "Open Graph tags", "Basic"),
        item(record.requires_seo("sitemap"), "XML sitemap", "Technical"),
        item(record.requires_seo("robots-txt"), "robots.txt", "Technical"),
        item(
            record.requires_seo("structured-data"),
            "Schema.org structured data",
            "Advanced",
        ),
        item(
            contains_value(&record.performance_goals, "lighthouse-95"),
            "Lighthouse 95+ score",
            "Performance",
        ),
        item(
            contains_value(&record.image_optimization, "webp"),
            "WebP image format",
            "Performance",
        ),
        item(
            contains_value(&record.image_optimization, "next-image"),
            "Next.js Image component",
            "Performance",
        ),
        item(
            contains_value(&record.accessibility_requirements, "wcag-aa"),
            "WCAG AA compliance",
            "Accessibility",
        ),
        item(
            contains_value(&record.accessibility_requirements, "keyboard-nav"),
            "Keyboard navigation",
            "Accessibility",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn complete_record() -> AnswerRecord {
        AnswerRecord {
            app_name: "Lumen".to_string(),
            tagline: "Light up your reading list".to_string(),
            hero_headline: "Read more, forget less".to_string(),
            seo_requirements: strings(&["meta-tags", "sitemap", "robots-txt", "structured-data", "og-tags"]),
            performance_goals: strings(&["lighthouse-95", "seo-optimized"]),
            image_optimization: strings(&["webp", "next-image"]),
            accessibility_requirements: strings(&["wcag-aa", "keyboard-nav"]),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_record_scores_perfect() {
        let seo = score_seo(&complete_record());
        assert_eq!(seo.score, 100);
        assert_eq!(seo.grade, SeoGrade::A);
        assert!(seo.issues.is_empty());
    }

    #[test]
    fn test_empty_values_are_not_too_long() {
        let record = AnswerRecord {
            app_name: String::new(),
            ..complete_record()
        };

        let seo = score_seo(&record);
        let descriptions: Vec<_> = seo.issues.iter().map(|i| i.description.as_str()).collect();

        assert_eq!(descriptions, vec!["App name too short"]);
        assert_eq!(seo.score, 90);
    }

    #[test]
    fn test_score_clamps_at_zero_and_sorts_by_impact() {
        let record = AnswerRecord {
            category: ProductCategory::Ecommerce,
            app_name: String::new(),
            tagline: "T".repeat(200),
            hero_headline: String::new(),
            performance_goals: Vec::new(),
            image_optimization: Vec::new(),
            accessibility_requirements: Vec::new(),
            ..Default::default()
        };

        let seo = score_seo(&record);

        assert_eq!(seo.score, 0);
        assert_eq!(seo.grade, SeoGrade::F);
        assert!(seo.issues.windows(2).all(|w| w[0].impact <= w[1].impact));
    }

    #[rstest]
    #[case(100, SeoGrade::A)]
    #[case(90, SeoGrade::A)]
    #[case(89, SeoGrade::B)]
    #[case(70, SeoGrade::C)]
    #[case(60, SeoGrade::D)]
    #[case(59, SeoGrade::F)]
    #[case(0, SeoGrade::F)]
    fn test_grade_thresholds(#[case] score: u8, #[case] expected: SeoGrade) {
        assert_eq!(SeoGrade::from_score(score), expected);
    }

    #[test]
    fn test_portfolio_social_signal() {
        let record = AnswerRecord {
            category: ProductCategory::Portfolio,
            ..complete_record()
        };

        let seo = score_seo(&record);
        assert_eq!(seo.score, 95);
        assert_eq!(seo.issues[0].category, "Social Signals");
    }

    #[test]
    fn test_recommendations_follow_priority_order() {
        let record = AnswerRecord {
            seo_requirements: strings(&["meta-tags"]),
            image_optimization: strings(&["webp", "next-image"]),
            ..Default::default()
        };

        let priorities: Vec<_> = seo_recommendations(&record)
            .iter()
            .map(|r| r.priority)
            .collect();

        assert_eq!(
            priorities,
            vec![
                Severity::High,
                Severity::High,
                Severity::Medium,
                Severity::Medium,
                Severity::Medium,
            ]
        );
        assert!(seo_recommendations(&complete_record()).is_empty());
    }

    #[test]
    fn test_tips_add_category_specifics() {
        assert_eq!(seo_tips(&AnswerRecord::default()).len(), 10);

        let blog = AnswerRecord {
            category: ProductCategory::BlogApp,
            ..Default::default()
        };
        let tips = seo_tips(&blog);
        assert_eq!(tips.len(), 13);
        assert_eq!(tips[10], "Add author bios and bylines");
    }

    #[test]
    fn test_checklist_reflects_record() {
        let checklist = seo_checklist(&AnswerRecord::default());

        assert_eq!(checklist.len(), 10);
        let checked: Vec<_> = checklist.iter().filter(|c| c.checked).map(|c| c.item).collect();
        assert_eq!(
            checked,
            vec!["Next.js Image component", "WCAG AA compliance", "Keyboard navigation"]
        );
    }
}
