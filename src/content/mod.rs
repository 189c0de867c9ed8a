use anyhow::{Result, bail};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter};

mod posts_default;

/// The closed set of topical tags a post can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    #[strum(serialize = "Java SE")]
    JavaSe,
    #[strum(serialize = "Design Patterns")]
    DesignPatterns,
    #[strum(serialize = "System Design")]
    SystemDesign,
    #[strum(serialize = "Spring Boot")]
    SpringBoot,
}

/// Listing filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(c) => write!(f, "{c}"),
        }
    }
}

/// An immutable blog article record. `content` uses a blank line (double
/// newline) as the paragraph delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub author: String,
    pub date: String,
    pub read_time: String,
    pub summary: String,
    pub content: String,
    pub code_snippet: Option<String>,
}

/// Static About screen content, authored alongside the posts.
pub struct AboutContent {
    pub heading: &'static str,
    pub intro: &'static str,
    pub tech_stack: &'static [&'static str],
    pub current_role: &'static str,
    pub tagline: &'static str,
}

pub const ABOUT: AboutContent = AboutContent {
    heading: "About Me",
    intro: "Hi, I'm Subrat, a passionate Java developer with expertise in \
            building robust backend systems, microservices architecture, and \
            enterprise applications. I love solving complex problems and \
            sharing my knowledge with the developer community.",
    tech_stack: &[
        "Java 17+, Spring Boot, Hibernate",
        "Microservices & REST APIs",
        "Docker, Kubernetes, AWS",
        "CI/CD Pipelines",
        "React Js (Full-stack)",
    ],
    current_role: "Java Developer at IbaseIt Inc. Developing backend systems \
                   using Finite State Machine (FSM) based frameworks to manage \
                   complex state transitions and workflow logic efficiently.",
    tagline: "With 1+ years of experience and 20+ projects completed, I'm \
              committed to delivering high-quality software solutions.",
};

/// The fixed, ordered post collection. Built once at startup from the
/// authored defaults and read-only afterwards; authoring order is preserved.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Load the authored collection, rejecting malformed posts up front so
    /// filtering and rendering never see them.
    pub fn load() -> Result<Self> {
        Self::from_posts(posts_default::default_posts())
    }

    pub fn from_posts(posts: Vec<Post>) -> Result<Self> {
        let mut seen = HashSet::new();
        for post in &posts {
            if post.id.trim().is_empty() {
                bail!("post with empty id");
            }
            if !seen.insert(post.id.as_str()) {
                bail!("duplicate post id '{}'", post.id);
            }
            for (field, value) in [
                ("title", &post.title),
                ("summary", &post.summary),
                ("content", &post.content),
                ("author", &post.author),
                ("date", &post.date),
                ("read_time", &post.read_time),
            ] {
                if value.trim().is_empty() {
                    bail!("post '{}' has empty {}", post.id, field);
                }
            }
        }
        tracing::info!("Loaded {} posts", posts.len());
        Ok(Self { posts })
    }

    /// Full collection in authoring order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post_by_id(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
