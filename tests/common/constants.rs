//! Shared constants for end-to-end tests
//!
//! When the test dataset changes, update only this file.

// ============================================================================
// Dataset Layout
// ============================================================================

/// Header row with every column the loader knows about
pub const FULL_HEADER: &str = "Name,Platform,Year_of_Release,Genre,Publisher,Developer,Critic_Score,User_Score,Rating,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales";

// ============================================================================
// Test Catalog Rows
// ============================================================================

pub const GAME_FFX: &str = "Final Fantasy X";
pub const GAME_HALO: &str = "Halo 3";
pub const GAME_DQ: &str = "Dragon Quest IX";
pub const GAME_GOW: &str = "God of War";
pub const GAME_KH: &str = "Kingdom Hearts";
pub const GAME_MYSTERY: &str = "Mystery Box";

/// Six games: three RPGs (one with a lowercase genre), one shooter, one
/// action game and a row with every optional cell empty.
pub const CATALOG_ROWS: &[&str] = &[
    "Final Fantasy X,PS2,2001,RPG,Sony Computer Entertainment,SquareSoft,92,9,T,2.91,2.07,2.87,0.33,8.05",
    "Halo 3,X360,2007,Shooter,Microsoft Game Studios,Bungie Studios,94,8,M,7.97,2.81,0.13,1.21,12.12",
    "Dragon Quest IX,DS,2009,rpg,Nintendo,Level 5,,tbd,E,0.01,0.01,4.35,0.0,4.37",
    "God of War,PS2,2005,Action,Sony Computer Entertainment,SCE Santa Monica,93,9.0,M,2.31,1.59,0.0,0.84,4.74",
    "Kingdom Hearts,PS2,2002,RPG,Sony Computer Entertainment,SquareSoft,85,8.5,E,3.64,1.2,1.49,0.07,6.4",
    "Mystery Box,,,Puzzle,,,,,,,,,,",
];

pub const GAMES_COUNT: usize = 6;

// ============================================================================
// Expected Normalized Values
// ============================================================================

/// Mean of the provided critic scores 92, 94, 93, 85
pub const CRITIC_MEAN: f64 = 91.0;

/// Mean of the user scores 90, 80, 0 ("tbd"), 90, 85 after the 0-10 to 0-100
/// rescale. The missing Mystery Box cell is zero-filled and left out.
pub const USER_MEAN: f64 = 69.0;

/// Centroid of the "high" term over 0..=10: (5*0 + 6*0.2 + ... + 10*1) / 3
pub const MATCH_SCORE: f64 = 26.0 / 3.0;

/// Centroid of the "low" term over 0..=10
pub const NOT_MATCH_SCORE: f64 = 4.0 / 3.0;

pub const EPSILON: f64 = 1e-9;
