//! Resources and their enumerated attributes.

use std::fmt;

use crate::error::{DispatchForgeError, Result};

/// Unique identifier of a resource within one pool snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceId(pub u64);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId(id)
    }
}

/// Resource tier.
///
/// Backend codes: 0 = Genesis, 1 = Base, 2 = Elite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Genesis,
    Base,
    Elite,
}

impl Tier {
    /// All tiers in backend code order.
    pub const ALL: [Tier; 3] = [Tier::Genesis, Tier::Base, Tier::Elite];

    /// Returns the backend code.
    pub const fn code(self) -> i64 {
        match self {
            Tier::Genesis => 0,
            Tier::Base => 1,
            Tier::Elite => 2,
        }
    }

    /// Converts a backend code; `-1` means unknown.
    pub fn from_code(code: i64) -> Result<Option<Tier>> {
        match code {
            -1 => Ok(None),
            0 => Ok(Some(Tier::Genesis)),
            1 => Ok(Some(Tier::Base)),
            2 => Ok(Some(Tier::Elite)),
            other => Err(DispatchForgeError::DomainModel(format!(
                "unknown tier code {other}"
            ))),
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Genesis => "Genesis",
            Tier::Base => "Base",
            Tier::Elite => "Elite",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Bear,
    Monkey,
    Rabbit,
    Squirrel,
    Horse,
    Badger,
    Tiger,
    Cat,
    Dog,
    Raccoon,
    Fox,
}

impl Category {
    /// All categories in backend code order (code = index).
    pub const ALL: [Category; 11] = [
        Category::Bear,
        Category::Monkey,
        Category::Rabbit,
        Category::Squirrel,
        Category::Horse,
        Category::Badger,
        Category::Tiger,
        Category::Cat,
        Category::Dog,
        Category::Raccoon,
        Category::Fox,
    ];

    /// Returns the backend code.
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Converts a backend code; `-1` means any/unknown.
    pub fn from_code(code: i64) -> Result<Option<Category>> {
        if code == -1 {
            return Ok(None);
        }
        usize::try_from(code)
            .ok()
            .and_then(|i| Category::ALL.get(i).copied())
            .map(Some)
            .ok_or_else(|| DispatchForgeError::DomainModel(format!("unknown category code {code}")))
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Bear => "Bear",
            Category::Monkey => "Monkey",
            Category::Rabbit => "Rabbit",
            Category::Squirrel => "Squirrel",
            Category::Horse => "Horse",
            Category::Badger => "Badger",
            Category::Tiger => "Tiger",
            Category::Cat => "Cat",
            Category::Dog => "Dog",
            Category::Raccoon => "Raccoon",
            Category::Fox => "Fox",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A discrete, uniquely identified unit in the shared pool.
///
/// Immutable once fetched; the planner only ever copies resources between
/// pools and results.
///
/// # Example
///
/// ```
/// use dispatchforge_core::{Category, Resource, Tier};
///
/// let r = Resource::new(9, 1)
///     .with_category(Category::Bear)
///     .with_tier(Tier::Base);
/// assert_eq!(r.to_string(), "9(Bear, Base, G1, S0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    pub id: ResourceId,
    pub grade: u8,
    pub category: Option<Category>,
    pub tier: Option<Tier>,
    pub sub_tier: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

impl Resource {
    /// Creates a resource with no category, unknown tier and sub-tier 0.
    pub fn new(id: impl Into<ResourceId>, grade: u8) -> Self {
        Self {
            id: id.into(),
            grade,
            category: None,
            tier: None,
            sub_tier: 0,
            name: String::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_sub_tier(mut self, sub_tier: u8) -> Self {
        self.sub_tier = sub_tier;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.category.map_or("?", Category::name);
        let tier = self.tier.map_or("Any", Tier::name);
        write!(
            f,
            "{}({}, {}, G{}, S{})",
            self.id, category, tier, self.grade, self.sub_tier
        )
    }
}
