use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    geography::{Geography, GeographyOptions, Membership},
    reference::{ReferenceData, Resolution},
};

pub const INSET_ZOOM: f64 = 0.5;
pub const INSET_ASPECT_RATIO: f64 = 1.0;

/// A small secondary geography focused on one territory.
#[derive(Debug, Clone)]
pub struct Inset {
    territory: String,
    geography: Geography,
}

impl Inset {
    #[inline] pub fn territory(&self) -> &str { &self.territory }

    #[inline] pub fn geography(&self) -> &Geography { &self.geography }
}

/// Build one inset geography per eligible requested territory, in request order.
/// Territories that are not members on `date`, or not framed by the outer map, are skipped.
pub(crate) fn compose_insets(
    reference: &ReferenceData,
    options: &GeographyOptions,
    date: NaiveDate,
    membership: &Membership,
) -> Result<Vec<Inset>> {
    let mut insets = Vec::with_capacity(options.insets.len());

    for name in &options.insets {
        if !membership.is_member(name) || !membership.is_framing(name) {
            tracing::debug!(territory = %name, %date, "skipping ineligible inset");
            continue;
        }

        let inset_options = GeographyOptions {
            date: options.date.clone(),
            subset: Some(vec![name.clone()]),
            aspect_ratio: Some(INSET_ASPECT_RATIO),
            zoom: INSET_ZOOM,
            show_non_member_states: options.show_non_member_states,
            insets: Vec::new(),
            resolution: Resolution::High,
        };

        insets.push(Inset {
            territory: name.clone(),
            geography: Geography::build(reference, inset_options, date)?,
        });
    }

    Ok(insets)
}

/// Position of an inset in fractions of the main map frame, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetPlacement {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Slot `index` of a top-right anchored vertical stack.
///
/// `height` and `gap` are fractions of map height; horizontal extents are divided
/// by the outer aspect ratio so square insets stay square.
pub fn stack_placement(index: usize, outer_aspect_ratio: f64, height: f64, gap: f64) -> InsetPlacement {
    let ymax = 1.0 - gap - index as f64 * (height + gap);
    let xmax = 1.0 - gap / outer_aspect_ratio;

    InsetPlacement {
        xmin: xmax - height / outer_aspect_ratio,
        xmax,
        ymin: ymax - height,
        ymax,
    }
}
