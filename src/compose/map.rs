use crate::{
    compose::{ComposeOptions, PlotData, Theme},
    geography::{stack_placement, Geography, InsetPlacement},
    palette::Palette,
};

/// One inset, positioned in the main map frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InsetPlot {
    territory: String,
    placement: InsetPlacement,
    plot: PlotData,
}

impl InsetPlot {
    #[inline] pub fn territory(&self) -> &str { &self.territory }

    #[inline] pub fn placement(&self) -> &InsetPlacement { &self.placement }

    #[inline] pub fn plot(&self) -> &PlotData { &self.plot }
}

/// Everything the renderer needs for one map.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedMap {
    title: Option<String>,
    main: PlotData,
    insets: Vec<InsetPlot>,
    theme: Theme,
}

impl ComposedMap {
    #[inline] pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    #[inline] pub fn main(&self) -> &PlotData { &self.main }

    #[inline] pub fn insets(&self) -> &[InsetPlot] { &self.insets }

    #[inline] pub fn theme(&self) -> &Theme { &self.theme }
}

/// Fuse a geography and a palette. Recomputed on every call, so one geography
/// or palette can be shared by several maps.
pub fn compose(geography: &Geography, palette: &Palette, options: &ComposeOptions) -> ComposedMap {
    let theme = &options.theme;
    let main = PlotData::new(geography, palette);

    let insets = geography.insets().iter().enumerate()
        .map(|(i, inset)| InsetPlot {
            territory: inset.territory().to_string(),
            placement: stack_placement(i, main.aspect_ratio(), theme.inset_height, theme.inset_gap),
            plot: PlotData::new(inset.geography(), palette),
        })
        .collect::<Vec<_>>();

    tracing::info!(
        title = options.title.as_deref().unwrap_or(""),
        features = main.features().len(),
        legend = main.legend().len(),
        insets = insets.len(),
        "composed map"
    );

    ComposedMap { title: options.title.clone(), main, insets, theme: theme.clone() }
}
