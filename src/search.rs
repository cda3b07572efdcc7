//! The recipe search engine and result formatter.

use serde::{Deserialize, Serialize};

use crate::core::{delta_e_2000, format_hex, lab_to_srgb, parse_hex, srgb_to_lab, HexCase};
use crate::mixture::mix;
use crate::palette::Paint;
use crate::Float;

/// The smallest searched recipe size. A one-paint "mixture" is just that
/// paint, so the search starts at two.
pub const MIN_RECIPE_SIZE: usize = 2;

/// The order of the formatted recipe list.
///
/// Historically both orders have been in use, so the choice is an explicit
/// option rather than hard-coded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputOrder {
    /// Order recipes by the number of paints, smallest first.
    #[default]
    BySizeAscending,
    /// Order recipes by accuracy, best first. Exact ties keep the
    /// size-ascending order.
    ByAccuracyDescending,
}

/// The search configuration.
///
/// The defaults reproduce the widest reference behavior: recipe sizes up to
/// four paints, ratios drawn from `1..=2`, size-ascending output with
/// lowercase hex, and no evaluation budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// The largest searched recipe size. The search space grows
    /// combinatorially with this bound, which is why it defaults to a small
    /// constant, 4.
    pub max_recipe_size: usize,
    /// The largest ratio assigned to a single paint; ratios range over
    /// `1..=max_ratio`. Defaults to 2.
    pub max_ratio: u32,
    /// The order of the formatted recipe list.
    pub output_order: OutputOrder,
    /// The digit case for formatted hex colors.
    pub hex_case: HexCase,
    /// An optional cap on the number of scored paint/ratio combinations.
    ///
    /// Without a cap, a large palette can make a single search arbitrarily
    /// expensive. When the cap is reached, enumeration stops and the winners
    /// found so far are returned, so results remain deterministic but may
    /// miss better recipes that later combinations would have produced.
    pub budget: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_recipe_size: 4,
            max_ratio: 2,
            output_order: OutputOrder::default(),
            hex_case: HexCase::default(),
            budget: None,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A formatted mixing recipe.
///
/// Each recipe pairs paint names with their integer mixing ratios and records
/// how faithfully the mixture reproduces the target: `accuracy` is `max(0,
/// 100 − ΔE₀₀)` rounded to two decimals, and `mixed_hex` is the mixture's
/// color converted back to hashed hexadecimal sRGB.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixRecipe {
    /// The paint names with their mixing ratios, in subset enumeration order.
    ///
    /// Serializes as a map keyed by paint name, the shape transport layers
    /// expect, while staying an ordered vector in memory.
    #[serde(with = "parts_as_map")]
    pub parts: Vec<(String, u32)>,
    /// The match quality on a 0–100 scale, two-decimal precision.
    pub accuracy: Float,
    /// The mixture's color as a hashed six-digit hexadecimal string.
    pub mixed_hex: String,
}

/// Serialize recipe parts as a map from paint name to ratio.
///
/// JSON objects have no defined key order, but serde_json and most peers
/// preserve insertion order, so the map reads in subset enumeration order
/// too. Deserialization accepts any key order.
mod parts_as_map {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(parts: &[(String, u32)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(parts.len()))?;
        for (name, ratio) in parts {
            map.serialize_entry(name, ratio)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, u32)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PartsVisitor;

        impl<'de> Visitor<'de> for PartsVisitor {
            type Value = Vec<(String, u32)>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map from paint name to mixing ratio")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut parts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    parts.push(entry);
                }
                Ok(parts)
            }
        }

        deserializer.deserialize_map(PartsVisitor)
    }
}

/// The winning candidate for one recipe size, before formatting.
#[derive(Clone, Debug)]
struct Candidate {
    /// Palette indices of the subset, ascending.
    paints: Vec<usize>,
    /// The ratio per paint, parallel to `paints`.
    ratios: Vec<u32>,
    /// The CIEDE2000 difference from the target.
    difference: Float,
    /// The mixed color in L*a*b*.
    mixed_lab: [Float; 3],
}

// --------------------------------------------------------------------------------------------------------------------

/// The recipe mixer.
///
/// A mixer holds nothing but its immutable [`SearchOptions`], so one instance
/// constructed at startup can serve any number of concurrent
/// [`solve`](Mixer::solve) calls without synchronization.
#[derive(Clone, Debug, Default)]
pub struct Mixer {
    options: SearchOptions,
}

impl Mixer {
    /// Create a new mixer with the given search options.
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Access the search options.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Compute the best mixing recipes for the target color.
    ///
    /// For every recipe size from [`MIN_RECIPE_SIZE`] through the configured
    /// maximum, this method enumerates each subset of that size from the
    /// palette together with each ratio assignment from the configured range,
    /// scores the resulting mixture against the target with CIEDE2000, and
    /// keeps the single best candidate per size. The winner is the first
    /// candidate in enumeration order with the strictly smallest difference,
    /// which makes results deterministic down to exact ties.
    ///
    /// A target that does not decode as a hex color, a palette smaller than
    /// [`MIN_RECIPE_SIZE`], and an exhausted evaluation budget all shrink the
    /// result rather than fail: the method never errors.
    pub fn solve(&self, target_hex: &str, palette: &[Paint]) -> Vec<MixRecipe> {
        let Ok(rgb) = parse_hex(target_hex) else {
            return Vec::new();
        };
        let target = srgb_to_lab(&rgb);

        let winners = self.search(&target, palette);
        self.format_recipes(winners, palette)
    }

    /// Run the search, returning at most one winning candidate per size.
    #[cfg(not(feature = "rayon"))]
    fn search(&self, target: &[Float; 3], palette: &[Paint]) -> Vec<Candidate> {
        self.search_sequential(target, palette)
    }

    /// Run the search, returning at most one winning candidate per size.
    ///
    /// The parallel path reproduces the sequential winners exactly; see
    /// [`search_parallel`](Self::search_parallel) for the merge order. An
    /// evaluation budget requires globally ordered enumeration, so budgeted
    /// searches stay sequential.
    #[cfg(feature = "rayon")]
    fn search(&self, target: &[Float; 3], palette: &[Paint]) -> Vec<Candidate> {
        if self.options.budget.is_some() {
            self.search_sequential(target, palette)
        } else {
            self.search_parallel(target, palette)
        }
    }

    fn search_sequential(&self, target: &[Float; 3], palette: &[Paint]) -> Vec<Candidate> {
        let mut winners = Vec::new();
        let mut budget = self.options.budget;

        'sizes: for size in MIN_RECIPE_SIZE..=self.options.max_recipe_size {
            if palette.len() < size {
                continue;
            }

            let mut best: Option<Candidate> = None;
            for subset in Combinations::new(palette.len(), size) {
                let labs: Vec<[Float; 3]> = subset.iter().map(|&index| palette[index].lab()).collect();

                for ratios in RatioAssignments::new(self.options.max_ratio, size) {
                    if let Some(remaining) = budget.as_mut() {
                        if *remaining == 0 {
                            winners.extend(best.take());
                            break 'sizes;
                        }
                        *remaining -= 1;
                    }

                    let candidate = score(target, &labs, &subset, &ratios);
                    if best
                        .as_ref()
                        .map_or(true, |best| candidate.difference < best.difference)
                    {
                        best = Some(candidate);
                    }
                }
            }
            winners.extend(best);
        }

        winners
    }

    /// Run the search with one parallel scan per recipe size.
    ///
    /// Subsets of one size are scored in parallel; each task reduces its own
    /// ratio assignments with the sequential first-found rule and reports the
    /// subset's ordinal. The final reduction takes the minimum by
    /// `(difference, ordinal)`, which is a total order and therefore yields
    /// the same winner as the sequential scan no matter how rayon splits the
    /// work.
    #[cfg(feature = "rayon")]
    fn search_parallel(&self, target: &[Float; 3], palette: &[Paint]) -> Vec<Candidate> {
        use rayon::prelude::*;

        let mut winners = Vec::new();

        for size in MIN_RECIPE_SIZE..=self.options.max_recipe_size {
            if palette.len() < size {
                continue;
            }

            let subsets: Vec<Vec<usize>> = Combinations::new(palette.len(), size).collect();
            let best = subsets
                .into_par_iter()
                .enumerate()
                .map(|(ordinal, subset)| {
                    let labs: Vec<[Float; 3]> =
                        subset.iter().map(|&index| palette[index].lab()).collect();

                    let mut best: Option<Candidate> = None;
                    for ratios in RatioAssignments::new(self.options.max_ratio, size) {
                        let candidate = score(target, &labs, &subset, &ratios);
                        if best
                            .as_ref()
                            .map_or(true, |best| candidate.difference < best.difference)
                        {
                            best = Some(candidate);
                        }
                    }
                    (ordinal, best)
                })
                .filter_map(|(ordinal, best)| best.map(|best| (ordinal, best)))
                .min_by(|(ordinal1, candidate1), (ordinal2, candidate2)| {
                    candidate1
                        .difference
                        .total_cmp(&candidate2.difference)
                        .then(ordinal1.cmp(ordinal2))
                });
            winners.extend(best.map(|(_, candidate)| candidate));
        }

        winners
    }

    /// Format the winning candidates into recipes and order them.
    fn format_recipes(&self, winners: Vec<Candidate>, palette: &[Paint]) -> Vec<MixRecipe> {
        let mut recipes: Vec<MixRecipe> = winners
            .into_iter()
            .map(|candidate| {
                let accuracy = (0.0 as Float).max(100.0 - candidate.difference);
                let accuracy = (accuracy * 100.0).round() / 100.0;

                let parts = candidate
                    .paints
                    .iter()
                    .zip(candidate.ratios.iter())
                    .map(|(&index, &ratio)| (palette[index].name.clone(), ratio))
                    .collect();

                MixRecipe {
                    parts,
                    accuracy,
                    mixed_hex: format_hex(&lab_to_srgb(&candidate.mixed_lab), self.options.hex_case),
                }
            })
            .collect();

        // Winners arrive ordered by size; a stable sort preserves that order
        // for exact accuracy ties.
        if self.options.output_order == OutputOrder::ByAccuracyDescending {
            recipes.sort_by(|recipe1, recipe2| recipe2.accuracy.total_cmp(&recipe1.accuracy));
        }

        recipes
    }
}

/// Mix one subset under one ratio assignment and score it against the target.
fn score(target: &[Float; 3], labs: &[[Float; 3]], subset: &[usize], ratios: &[u32]) -> Candidate {
    let parts: Vec<([Float; 3], u32)> = labs
        .iter()
        .copied()
        .zip(ratios.iter().copied())
        .collect();
    let mixed_lab = mix(&parts);

    Candidate {
        paints: subset.to_vec(),
        ratios: ratios.to_vec(),
        difference: delta_e_2000(target, &mixed_lab),
        mixed_lab,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An iterator over the size-`k` subsets of `0..n` in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance the rightmost index with headroom; reset those after it.
        let k = self.indices.len();
        let mut position = k;
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            if self.indices[position] + (k - position) < self.n {
                self.indices[position] += 1;
                for after in position + 1..k {
                    self.indices[after] = self.indices[after - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// An iterator over all assignments of ratios `1..=max_ratio` to `k`
/// positions, with the last position varying fastest.
struct RatioAssignments {
    max_ratio: u32,
    ratios: Vec<u32>,
    done: bool,
}

impl RatioAssignments {
    fn new(max_ratio: u32, k: usize) -> Self {
        Self {
            max_ratio,
            ratios: vec![1; k],
            done: max_ratio == 0,
        }
    }
}

impl Iterator for RatioAssignments {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.ratios.clone();

        // Odometer increment from the right.
        let mut position = self.ratios.len();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            if self.ratios[position] < self.max_ratio {
                self.ratios[position] += 1;
                for after in &mut self.ratios[position + 1..] {
                    *after = 1;
                }
                break;
            }
        }

        Some(current)
    }
}

// ====================================================================================================================
