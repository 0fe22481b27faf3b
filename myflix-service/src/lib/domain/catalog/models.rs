use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Genre unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenreId(pub Uuid);

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Director unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectorId(pub Uuid);

impl fmt::Display for DirectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog entry.
///
/// `genre` and `director` reference rows in their own collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub description: String,
    pub genre: GenreId,
    pub director: DirectorId,
    pub year_released: Option<NaiveDate>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub description: String,
    pub audience: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Director {
    pub id: DirectorId,
    pub name: String,
    pub bio: Option<String>,
    pub birth_year: Option<NaiveDate>,
    pub death_year: Option<NaiveDate>,
}
