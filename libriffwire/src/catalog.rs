//! Static article and category catalog
//!
//! The catalog is the data source the rest of the app consumes: an
//! ordered sequence of articles plus category metadata, constructed once
//! and held immutably for the process lifetime. A future backed data
//! source only has to produce the same shapes.

use crate::error::CatalogError;
use crate::theme::ColorName;
use crate::types::{Article, Category, IconName};

/// A lightweight category entry for the home screen's quick row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickCategory {
    pub name: &'static str,
    pub icon: IconName,
    pub color: ColorName,
}

/// The static dataset backing every screen
///
/// Owns all records exclusively; consumers borrow or clone. Article ids
/// are checked for uniqueness across all lists at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    home: Vec<Article>,
    category_featured: Vec<Article>,
    search_matches: Vec<Article>,
    categories: Vec<Category>,
    quick_categories: Vec<QuickCategory>,
    popular_searches: Vec<&'static str>,
    recent_searches: Vec<&'static str>,
    trending_tags: Vec<&'static str>,
}

// Filler body shared by all articles; the seed sentence differs per
// record, the rest stands in for the article body a real feed would carry.
const BODY_FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.\n\nDuis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.\n\nSed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium, totam rem aperiam, eaque ipsa quae ab illo inventore veritatis et quasi architecto beatae vitae dicta sunt explicabo.";

fn body(seed: &str) -> String {
    format!("{}\n\n{}", seed, BODY_FILLER)
}

impl Catalog {
    /// Build the built-in dataset
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self {
            home: vec![
                Article {
                    id: "1".to_string(),
                    title: "Metallica Announces New Album \"72 Seasons\"".to_string(),
                    summary: "The metal legends are back with their first studio album in 6 years, promising a return to their thrash roots.".to_string(),
                    content: body("Metallica has officially announced their highly anticipated new album..."),
                    image_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400".to_string(),
                    category: "News".to_string(),
                    author: "Metal Mike".to_string(),
                    published_at: "2024-01-15".to_string(),
                    read_time: 3,
                    tags: vec!["Metallica".to_string(), "New Album".to_string(), "Thrash Metal".to_string()],
                    source: "Metal Hammer".to_string(),
                },
                Article {
                    id: "2".to_string(),
                    title: "Iron Maiden World Tour 2024 Dates Revealed".to_string(),
                    summary: "The British heavy metal icons announce massive world tour with special guests.".to_string(),
                    content: body("Iron Maiden has revealed the dates for their upcoming world tour..."),
                    image_url: "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?w=400".to_string(),
                    category: "Tours".to_string(),
                    author: "Sarah Steel".to_string(),
                    published_at: "2024-01-14".to_string(),
                    read_time: 2,
                    tags: vec!["Iron Maiden".to_string(), "World Tour".to_string(), "Live".to_string()],
                    source: "Loudwire".to_string(),
                },
                Article {
                    id: "3".to_string(),
                    title: "Black Sabbath Documentary Wins Grammy".to_string(),
                    summary: "The legendary band's documentary takes home the award for Best Music Film.".to_string(),
                    content: body("Black Sabbath's documentary has been honored with a Grammy Award..."),
                    image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=400".to_string(),
                    category: "Awards".to_string(),
                    author: "Rock Reporter".to_string(),
                    published_at: "2024-01-13".to_string(),
                    read_time: 4,
                    tags: vec!["Black Sabbath".to_string(), "Grammy".to_string(), "Documentary".to_string()],
                    source: "Rolling Stone".to_string(),
                },
            ],
            category_featured: vec![
                Article {
                    id: "4".to_string(),
                    title: "Slipknot Reveals New Masks for 2024 Tour".to_string(),
                    summary: "The masked metal giants unveil their latest terrifying designs.".to_string(),
                    content: body("Slipknot has revealed their new mask designs..."),
                    image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400".to_string(),
                    category: "Breaking News".to_string(),
                    author: "Metal Mike".to_string(),
                    published_at: "2024-01-12".to_string(),
                    read_time: 2,
                    tags: vec!["Slipknot".to_string(), "Masks".to_string(), "Tour".to_string()],
                    source: "Metal Injection".to_string(),
                },
                Article {
                    id: "5".to_string(),
                    title: "Tool's New Album Gets Perfect Score".to_string(),
                    summary: "Critics praise the progressive metal masterpiece.".to_string(),
                    content: body("Tool's latest album has received universal acclaim..."),
                    image_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400".to_string(),
                    category: "Album Reviews".to_string(),
                    author: "Sarah Steel".to_string(),
                    published_at: "2024-01-11".to_string(),
                    read_time: 5,
                    tags: vec!["Tool".to_string(), "Album Review".to_string(), "Progressive Metal".to_string()],
                    source: "Pitchfork".to_string(),
                },
            ],
            search_matches: vec![
                Article {
                    id: "6".to_string(),
                    title: "Megadeth Announces Farewell Tour".to_string(),
                    summary: "The thrash metal legends prepare for their final tour.".to_string(),
                    content: body("Megadeth has announced what they claim will be their farewell tour..."),
                    image_url: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=400".to_string(),
                    category: "Tours".to_string(),
                    author: "Rock Reporter".to_string(),
                    published_at: "2024-01-10".to_string(),
                    read_time: 3,
                    tags: vec!["Megadeth".to_string(), "Farewell Tour".to_string(), "Thrash Metal".to_string()],
                    source: "Blabbermouth".to_string(),
                },
                Article {
                    id: "7".to_string(),
                    title: "Ozzy Osbourne Health Update".to_string(),
                    summary: "The Prince of Darkness shares latest health news with fans.".to_string(),
                    content: body("Ozzy Osbourne has provided an update on his health condition..."),
                    image_url: "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?w=400".to_string(),
                    category: "News".to_string(),
                    author: "Metal Mike".to_string(),
                    published_at: "2024-01-09".to_string(),
                    read_time: 2,
                    tags: vec!["Ozzy Osbourne".to_string(), "Health".to_string(), "Black Sabbath".to_string()],
                    source: "Ultimate Guitar".to_string(),
                },
            ],
            categories: vec![
                Category {
                    id: "1".to_string(),
                    name: "Breaking News".to_string(),
                    icon: IconName::Flash,
                    color: ColorName::Primary,
                    news_count: 12,
                },
                Category {
                    id: "2".to_string(),
                    name: "Album Reviews".to_string(),
                    icon: IconName::Disc,
                    color: ColorName::Accent,
                    news_count: 8,
                },
                Category {
                    id: "3".to_string(),
                    name: "Live Shows".to_string(),
                    icon: IconName::MusicalNotes,
                    color: ColorName::MetalSilver,
                    news_count: 15,
                },
                Category {
                    id: "4".to_string(),
                    name: "Interviews".to_string(),
                    icon: IconName::Mic,
                    color: ColorName::MetalCopper,
                    news_count: 6,
                },
                Category {
                    id: "5".to_string(),
                    name: "New Releases".to_string(),
                    icon: IconName::PlayCircle,
                    color: ColorName::Success,
                    news_count: 10,
                },
                Category {
                    id: "6".to_string(),
                    name: "Festival News".to_string(),
                    icon: IconName::People,
                    color: ColorName::Warning,
                    news_count: 4,
                },
            ],
            quick_categories: vec![
                QuickCategory { name: "News", icon: IconName::Newspaper, color: ColorName::Primary },
                QuickCategory { name: "Reviews", icon: IconName::Star, color: ColorName::Accent },
                QuickCategory { name: "Tours", icon: IconName::MusicalNotes, color: ColorName::MetalSilver },
                QuickCategory { name: "Interviews", icon: IconName::Mic, color: ColorName::MetalCopper },
            ],
            popular_searches: vec![
                "Metallica", "Iron Maiden", "Black Sabbath", "Slipknot", "Tool",
                "Megadeth", "Ozzy Osbourne", "Death Metal", "Thrash Metal", "Progressive Metal",
            ],
            // Static placeholder content; there is no search history yet
            recent_searches: vec!["Metallica new album", "Iron Maiden tour", "Death metal bands"],
            trending_tags: vec![
                "Metallica", "Iron Maiden", "Black Sabbath", "Death Metal", "Thrash", "Progressive",
            ],
        };

        catalog.validate()?;
        Ok(catalog)
    }

    /// Check id uniqueness across every article list and the category set
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for article in self.all_articles() {
            if !seen.insert(article.id.as_str()) {
                return Err(CatalogError::DuplicateArticleId(article.id.clone()));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
        }

        Ok(())
    }

    /// The breaking-news article shown as the featured card
    pub fn featured(&self) -> &Article {
        &self.home[0]
    }

    /// The remaining home-feed articles
    pub fn latest(&self) -> &[Article] {
        &self.home[1..]
    }

    /// Every home-feed article, featured first
    pub fn home_articles(&self) -> &[Article] {
        &self.home
    }

    /// Articles highlighted on the categories screen
    pub fn category_featured(&self) -> &[Article] {
        &self.category_featured
    }

    /// The fixed result set the simulated search resolves to
    pub fn search_matches(&self) -> &[Article] {
        &self.search_matches
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn quick_categories(&self) -> &[QuickCategory] {
        &self.quick_categories
    }

    pub fn popular_searches(&self) -> &[&'static str] {
        &self.popular_searches
    }

    pub fn recent_searches(&self) -> &[&'static str] {
        &self.recent_searches
    }

    pub fn trending_tags(&self) -> &[&'static str] {
        &self.trending_tags
    }

    fn all_articles(&self) -> impl Iterator<Item = &Article> {
        self.home
            .iter()
            .chain(self.category_featured.iter())
            .chain(self.search_matches.iter())
    }
}
