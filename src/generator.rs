/// Deterministic and random color selection from a fixed palette.
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::debug;

use crate::color::Color;

const DEFAULT_COLORS: [u32; 9] = [
    0xFFF16364, 0xFFF58559, 0xFFF9A43E, 0xFFE4C62E, 0xFF67BF74, 0xFF59A2BE, 0xFF2093CD,
    0xFFAD62A7, 0xFF805781,
];

const MATERIAL_COLORS: [u32; 17] = [
    0xFFE57373, 0xFFF06292, 0xFFBA68C8, 0xFF9575CD, 0xFF7986CB, 0xFF64B5F6, 0xFF4FC3F7,
    0xFF4DD0E1, 0xFF4DB6AC, 0xFF81C784, 0xFFAED581, 0xFFFF8A65, 0xFFD4E157, 0xFFFFD54F,
    0xFFFFB74D, 0xFFA1887F, 0xFF90A4AE,
];

static DEFAULT: LazyLock<ColorGenerator> = LazyLock::new(|| builtin(&DEFAULT_COLORS));
static MATERIAL: LazyLock<ColorGenerator> = LazyLock::new(|| builtin(&MATERIAL_COLORS));

fn builtin(argb: &[u32]) -> ColorGenerator {
    ColorGenerator::from_palette(argb.iter().copied().map(Color::from_argb).collect())
}

fn non_empty(colors: impl IntoIterator<Item = Color>) -> Result<Box<[Color]>, InvalidPaletteError> {
    let colors: Box<[Color]> = colors.into_iter().collect();
    if colors.is_empty() {
        return Err(InvalidPaletteError);
    }
    Ok(colors)
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a color palette needs at least one color")]
pub struct InvalidPaletteError;

/// Picks colors from an immutable, non-empty palette.
///
/// Lookups by key never touch the random source, so [`ColorGenerator::get_color`]
/// is lock-free. [`ColorGenerator::random_color`] serialises on an internal mutex
/// and is safe to call from any thread, including on the shared palettes.
#[derive(Debug)]
pub struct ColorGenerator {
    colors: Box<[Color]>,
    rng: Mutex<StdRng>,
}

impl ColorGenerator {
    /// Builds a generator over `colors`, seeding the random source from the clock.
    pub fn create(colors: impl IntoIterator<Item = Color>) -> Result<Self, InvalidPaletteError> {
        let colors = non_empty(colors)?;
        debug!(size = colors.len(), "created color generator");
        Ok(Self::from_palette(colors))
    }

    /// Like [`ColorGenerator::create`] but with a fixed seed, for reproducible random picks.
    pub fn with_seed(
        colors: impl IntoIterator<Item = Color>,
        seed: u64,
    ) -> Result<Self, InvalidPaletteError> {
        let colors = non_empty(colors)?;
        debug!(size = colors.len(), seed, "created seeded color generator");
        Ok(Self {
            colors,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        })
    }

    // Callers guarantee `colors` is non-empty.
    fn from_palette(colors: Box<[Color]>) -> Self {
        let seed = Utc::now().timestamp_millis() as u64;
        Self {
            colors,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The shared 9-color palette.
    pub fn default_palette() -> &'static ColorGenerator {
        &DEFAULT
    }

    /// The shared 17-color material palette.
    pub fn material() -> &'static ColorGenerator {
        &MATERIAL
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Stable color for `key`. Equal keys always map to the same color on one
    /// generator; distinct keys may collide.
    pub fn get_color<K: Hash + ?Sized>(&self, key: &K) -> Color {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.color_for_hash(hasher.finish() as i64)
    }

    /// Color at `|hash| mod len`. `i64::MIN` is handled without overflow.
    pub fn color_for_hash(&self, hash: i64) -> Color {
        let index = hash.unsigned_abs() % self.colors.len() as u64;
        self.colors[index as usize]
    }

    /// Uniformly random palette entry; consecutive calls may repeat.
    pub fn random_color(&self) -> Color {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.colors[rng.random_range(0..self.colors.len())]
    }
}
