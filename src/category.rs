//! Fixed color categories and the enum-keyed array that stores one value per color
//!
//! The category set is closed: every table, chart series and test vector in
//! this crate is indexed by [`Category`] in the same order, so iteration never
//! depends on hashing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of fixed categories
pub const CATEGORY_COUNT: usize = 5;

/// A candy color counted per row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Blue,
    Green,
    Pink,
    Purple,
    Yellow,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Blue,
        Category::Green,
        Category::Pink,
        Category::Purple,
        Category::Yellow,
    ];

    /// Position of this category in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Category::Blue => 0,
            Category::Green => 1,
            Category::Pink => 2,
            Category::Purple => 3,
            Category::Yellow => 4,
        }
    }

    /// Column name used by the dataset source
    pub const fn name(self) -> &'static str {
        match self {
            Category::Blue => "Blue",
            Category::Green => "Green",
            Category::Pink => "Pink",
            Category::Purple => "Purple",
            Category::Yellow => "Yellow",
        }
    }

    /// Case-insensitive lookup by column name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One value per [`Category`], stored in fixed category order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryArray<T>([T; CATEGORY_COUNT]);

impl<T> CategoryArray<T> {
    /// Wrap values already laid out as Blue, Green, Pink, Purple, Yellow
    pub const fn new(values: [T; CATEGORY_COUNT]) -> Self {
        Self(values)
    }

    /// Values in category order
    pub fn values(&self) -> &[T; CATEGORY_COUNT] {
        &self.0
    }

    /// Iterate `(category, &value)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }

    /// Apply `f` to each value, keeping category order
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CategoryArray<U> {
        CategoryArray(self.0.map(f))
    }
}

impl<T: Copy> CategoryArray<T> {
    /// Array holding the same value for every category
    pub fn splat(value: T) -> Self {
        Self([value; CATEGORY_COUNT])
    }
}

impl CategoryArray<u64> {
    /// Sum across all categories
    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl CategoryArray<f64> {
    /// Sum across all categories
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl<T> Index<Category> for CategoryArray<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.0[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryArray<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.0[category.index()]
    }
}
