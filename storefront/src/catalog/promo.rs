//! Promo window derivation.
//!
//! The featured grid shows a fixed-size window over the visible catalog,
//! reordered by the admin's stored preference. Stored ids that no longer
//! resolve to a visible product are skipped at derivation time and never
//! deleted from the stored preference. Derivation is pure and
//! deterministic: identical inputs always give identical windows, since
//! several surfaces recompute it independently.

use shared::Product;
use std::collections::HashSet;

/// Capacity of each promo window
pub const PROMO_WINDOW: usize = 6;

/// Visible catalog reordered by the admin preference: referenced
/// products first (in stored order), then the remainder in natural
/// catalog order. Duplicate stored ids keep their first occurrence.
pub fn ordered_by_admin(catalog: &[Product], promo_order: &[i64]) -> Vec<Product> {
    let visible: Vec<&Product> = catalog.iter().filter(|p| !p.hidden_on_home).collect();

    let mut seen: HashSet<i64> = HashSet::new();
    let mut ordered: Vec<Product> = Vec::with_capacity(visible.len());

    for id in promo_order {
        if !seen.insert(*id) {
            continue;
        }
        if let Some(p) = visible.iter().find(|p| p.id == *id) {
            ordered.push((*p).clone());
        }
    }
    for p in &visible {
        if !seen.contains(&p.id) {
            ordered.push((*p).clone());
        }
    }

    ordered
}

/// Primary promo window.
///
/// Always exactly [`PROMO_WINDOW`] items when at least one visible
/// product exists; empty only when nothing is visible. A short catalog
/// is padded by cycling the already-selected base from an offset derived
/// from the full catalog size (hidden rows included), so padding repeats
/// are stable across recomputes.
pub fn promo_window(catalog: &[Product], promo_order: &[i64]) -> Vec<Product> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let ordered = ordered_by_admin(catalog, promo_order);
    if ordered.is_empty() {
        return Vec::new();
    }

    let mut base: Vec<Product> = ordered.iter().take(PROMO_WINDOW).cloned().collect();
    if base.len() == PROMO_WINDOW {
        return base;
    }

    let remaining = PROMO_WINDOW - base.len();
    let rest_pool = &ordered[base.len()..];
    let mut extras: Vec<Product> = rest_pool.iter().take(remaining).cloned().collect();

    if extras.len() < remaining && !base.is_empty() {
        let start = catalog.len() % base.len();
        let mut i = 0;
        while extras.len() < remaining {
            extras.push(base[(start + i) % base.len()].clone());
            i += 1;
        }
    }

    base.extend(extras);
    base
}

/// Secondary promo window: the next [`PROMO_WINDOW`] entries after the
/// primary window, unpadded. Shorter than the cap when the catalog is.
pub fn secondary_window(catalog: &[Product], promo_order: &[i64]) -> Vec<Product> {
    if catalog.is_empty() {
        return Vec::new();
    }

    ordered_by_admin(catalog, promo_order)
        .into_iter()
        .skip(PROMO_WINDOW)
        .take(PROMO_WINDOW)
        .collect()
}

/// Fold a drag-reorder of the displayed windows into the stored
/// preference: the rearranged window ids come first, then previously
/// stored ids not present in the window. The result replaces the stored
/// preference wholesale.
pub fn merge_promo_order(window_ids: &[i64], stored: &[i64]) -> Vec<i64> {
    let mut seen: HashSet<i64> = HashSet::new();
    let mut merged: Vec<i64> = Vec::with_capacity(window_ids.len() + stored.len());

    for id in window_ids.iter().chain(stored.iter()) {
        if seen.insert(*id) {
            merged.push(*id);
        }
    }

    merged
}
