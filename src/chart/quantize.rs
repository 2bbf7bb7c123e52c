//! Deterministic median-cut color quantization
//!
//! The color histogram is kept in a `BTreeMap` so every step iterates colors in
//! the same order regardless of input layout. Boxes are split along their widest
//! channel at the pixel-weighted median until the requested palette size is
//! reached or no box holds more than one color. Pixels are then mapped to the
//! nearest box color, unused entries are dropped and the palette is ordered by
//! descending pixel count with ascending RGB as the tie-breaker.

use crate::io::error::{Result, conversion_error, invalid_parameter};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Palette and per-pixel indices produced by quantization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantized {
    /// Distinct palette colors, most used first
    pub palette: Vec<[u8; 3]>,
    /// Palette index of each input pixel, in input order
    pub indices: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    const fn of(self, rgb: [u8; 3]) -> u8 {
        match self {
            Self::Red => rgb[0],
            Self::Green => rgb[1],
            Self::Blue => rgb[2],
        }
    }
}

/// Set of histogram entries covered by one palette slot
#[derive(Debug, Clone)]
struct ColorBox {
    entries: Vec<([u8; 3], usize)>,
}

impl ColorBox {
    // Widest channel and its value range; earlier channels win ties
    fn widest_channel(&self) -> (Channel, u8) {
        let mut best = (Channel::Red, 0);
        for channel in Channel::ALL {
            let values = self.entries.iter().map(|&(rgb, _)| channel.of(rgb));
            let min = values.clone().min().unwrap_or(0);
            let max = values.max().unwrap_or(0);
            let range = max - min;
            if range > best.1 {
                best = (channel, range);
            }
        }
        best
    }

    fn split(mut self, channel: Channel) -> (Self, Self) {
        self.entries
            .sort_unstable_by_key(|&(rgb, _)| (channel.of(rgb), rgb));

        let total: usize = self.entries.iter().map(|&(_, count)| count).sum();
        let mut cumulative = 0;
        let mut split_at = self.entries.len();
        for (position, &(_, count)) in self.entries.iter().enumerate() {
            cumulative += count;
            if cumulative * 2 >= total {
                split_at = position + 1;
                break;
            }
        }
        // Both halves must keep at least one color
        let split_at = split_at.clamp(1, self.entries.len().saturating_sub(1));

        let upper = self.entries.split_off(split_at);
        (self, Self { entries: upper })
    }

    fn mean(&self) -> [u8; 3] {
        let total: u64 = self.entries.iter().map(|&(_, count)| count as u64).sum();
        if total == 0 {
            return [0, 0, 0];
        }

        let mut sums = [0u64; 3];
        for &(rgb, count) in &self.entries {
            for (sum, value) in sums.iter_mut().zip(rgb) {
                *sum += u64::from(value) * count as u64;
            }
        }
        sums.map(|sum| ((sum + total / 2) / total) as u8)
    }
}

/// Reduce pixels to at most `max_colors` distinct colors
///
/// Identical input always yields identical palette order and indices.
///
/// # Errors
///
/// Returns an error if:
/// - `pixels` is empty
/// - `max_colors` is zero or exceeds 256
pub fn median_cut(pixels: &[[u8; 3]], max_colors: usize) -> Result<Quantized> {
    if max_colors == 0 || max_colors > 256 {
        return Err(invalid_parameter(
            "max_colors",
            &max_colors,
            &"must be between 1 and 256",
        ));
    }
    if pixels.is_empty() {
        return Err(conversion_error("quantize", &"image has no pixels"));
    }

    let mut histogram: BTreeMap<[u8; 3], usize> = BTreeMap::new();
    for &rgb in pixels {
        *histogram.entry(rgb).or_insert(0) += 1;
    }

    let seeds: Vec<[u8; 3]> = if histogram.len() <= max_colors {
        histogram.keys().copied().collect()
    } else {
        let entries = histogram.iter().map(|(&rgb, &count)| (rgb, count)).collect();
        split_boxes(entries, max_colors)
    };

    // Map each distinct color to its nearest seed and tally usage per color
    let mut assignment: BTreeMap<[u8; 3], [u8; 3]> = BTreeMap::new();
    let mut usage: BTreeMap<[u8; 3], usize> = BTreeMap::new();
    for (&rgb, &count) in &histogram {
        let seed = nearest_index(&seeds, rgb)
            .and_then(|index| seeds.get(index).copied())
            .ok_or_else(|| conversion_error("quantize", &"palette has no colors"))?;
        assignment.insert(rgb, seed);
        *usage.entry(seed).or_insert(0) += count;
    }

    let mut ordered: Vec<([u8; 3], usize)> = usage.into_iter().collect();
    ordered.sort_unstable_by_key(|&(rgb, count)| (Reverse(count), rgb));

    let mut final_index: BTreeMap<[u8; 3], u8> = BTreeMap::new();
    for (position, &(rgb, _)) in ordered.iter().enumerate() {
        let index = u8::try_from(position).map_err(|_overflow| {
            conversion_error("quantize", &format!("palette index {position} exceeds u8"))
        })?;
        final_index.insert(rgb, index);
    }

    let indices = pixels
        .iter()
        .map(|rgb| {
            assignment
                .get(rgb)
                .and_then(|seed| final_index.get(seed))
                .copied()
                .ok_or_else(|| conversion_error("quantize", &"pixel color was not assigned"))
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(Quantized {
        palette: ordered.into_iter().map(|(rgb, _)| rgb).collect(),
        indices,
    })
}

fn split_boxes(entries: Vec<([u8; 3], usize)>, max_colors: usize) -> Vec<[u8; 3]> {
    let mut boxes = vec![ColorBox { entries }];

    while boxes.len() < max_colors {
        let mut candidate: Option<(usize, Channel, u8)> = None;
        for (position, color_box) in boxes.iter().enumerate() {
            if color_box.entries.len() < 2 {
                continue;
            }
            let (channel, range) = color_box.widest_channel();
            if candidate.is_none_or(|(_, _, best)| range > best) {
                candidate = Some((position, channel, range));
            }
        }

        let Some((position, channel, _)) = candidate else {
            break;
        };

        let chosen = boxes.remove(position);
        let (lower, upper) = chosen.split(channel);
        boxes.insert(position, upper);
        boxes.insert(position, lower);
    }

    boxes.iter().map(ColorBox::mean).collect()
}

/// Index of the palette color closest to `rgb`
///
/// Distance is squared Euclidean in RGB space; ties resolve to the lowest
/// index. Returns `None` for an empty palette.
pub fn nearest_index(palette: &[[u8; 3]], rgb: [u8; 3]) -> Option<usize> {
    palette
        .iter()
        .enumerate()
        .min_by_key(|&(position, &candidate)| (squared_distance(candidate, rgb), position))
        .map(|(position, _)| position)
}

fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b)
        .map(|(&x, y)| {
            let delta = i32::from(x) - i32::from(y);
            delta.unsigned_abs().pow(2)
        })
        .sum()
}
