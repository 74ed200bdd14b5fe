//! The normalization driver: walks every weight vector of the requested attributes and
//! repairs it in place.

use crate::document::DocumentTables;
use crate::layout::{resolve_layout, LayoutDescriptor};
use crate::locate::locate_attributes;
use crate::ratio::ratio_with_deadzone;
use crate::reweight::reweight;
use crate::settings::NormalizeSettings;
use crate::stats::RunStats;
use tracing::{debug, warn};

/// A loaded document that owns both its tables and its binary buffer.
///
/// Implemented by container formats so [`normalize_container`] can borrow the tables
/// immutably while the buffer is rewritten.
pub trait WeightContainer {
    /// Borrows the document tables and the binary buffer they describe.
    fn tables_and_buffer_mut(&mut self) -> (&DocumentTables, &mut [u8]);
}

/// Normalizes the weights of a loaded document in place.
///
/// See [`normalize_weights`].
pub fn normalize_container<C, S>(
    container: &mut C,
    attributes: &[S],
    settings: &NormalizeSettings,
) -> RunStats
where
    C: WeightContainer + ?Sized,
    S: AsRef<str>,
{
    let (tables, buffer) = container.tables_and_buffer_mut();
    normalize_weights(tables, buffer, attributes, settings)
}

/// Normalizes every weight vector referenced by `attributes` on any mesh primitive.
///
/// Accessors that fail a structural check are logged and skipped; the run never fails.
/// An accessor referenced by several primitives is processed once per reference, which
/// is harmless since already normalized vectors fall inside the deadzone.
pub fn normalize_weights<S: AsRef<str>>(
    tables: &DocumentTables,
    buffer: &mut [u8],
    attributes: &[S],
    settings: &NormalizeSettings,
) -> RunStats {
    let locations = locate_attributes(&tables.meshes, attributes);
    let mut stats = RunStats::default();

    for &accessor in &locations.accessors {
        match resolve_layout(tables, accessor, buffer.len()) {
            Ok(layout) => {
                debug!(
                    "accessor {accessor}: {} weights in bytes {}..{}, stride {}",
                    layout.encoding,
                    layout.byte_offset,
                    layout.end(),
                    layout.byte_stride
                );
                normalize_accessor(&layout, buffer, settings, &mut stats);
            }
            Err(reason) => warn!("skipping: {reason}"),
        }
    }

    stats
}

/// Normalizes the weight vectors of one resolved accessor, adding to `stats`.
///
/// For each vector: an all-zero sum is replaced by the zero replacement; otherwise, unless
/// reweighting is skipped, a sum outside the deadzone is rescaled to full scale. Everything
/// else is left byte-for-byte untouched. Bytes between vectors are never written.
///
/// Stops early, with a warning, if a vector would run past the end of `buffer`.
pub fn normalize_accessor(
    layout: &LayoutDescriptor,
    buffer: &mut [u8],
    settings: &NormalizeSettings,
    stats: &mut RunStats,
) {
    let encoding = layout.encoding;
    let target = encoding.full_scale();
    let epsilon = settings.epsilon(encoding);
    let zero_replacement = settings.scaled_zero_replacement(encoding);

    for offset in layout.vector_offsets() {
        let Some(vector) = encoding.decode(buffer, offset) else {
            warn!(
                "accessor {}: weight vector at byte {offset} runs past the end of the {}-byte buffer, stopping",
                layout.accessor,
                buffer.len()
            );
            break;
        };
        stats.visited += 1;

        let sum: f64 = vector.iter().sum();
        let (repaired, reweighted) = if sum == 0.0 {
            (zero_replacement, false)
        } else if settings.skip_reweight() {
            continue;
        } else if let Some(ratio) = ratio_with_deadzone(sum, target, epsilon) {
            let repaired = reweight(
                &vector,
                ratio,
                target,
                !settings.skip_overkill(),
                encoding.is_integer(),
            );
            (repaired, true)
        } else {
            continue;
        };

        if encoding.encode(buffer, offset, &repaired).is_none() {
            break;
        }
        stats.altered += 1;
        if reweighted {
            stats.reweighted += 1;
        }
        debug!("byte {offset}: {vector:?} -> {repaired:?}");
    }
}
