//! Figure container holding a source image and the regions found in it.

use std::fmt;

use image::{DynamicImage, GenericImageView};

use crate::geometry::Point;
use crate::regions::{Diagram, DiagramId, Label, LabelId, Panel, Region};

/// A figure image and its detected regions.
///
/// The detection stage fills the collections once; later passes only read
/// them or update the mutable fields of individual regions.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Source image
    pub img: DynamicImage,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Center of the image
    pub center: Point,
    /// Diagrams, labels and other tagged panels
    pub panels: Vec<Region>,
    /// Plots found in the figure
    pub plots: Vec<Panel>,
    /// Photos found in the figure
    pub photos: Vec<Panel>,
}

impl Figure {
    /// Create a figure with no regions.
    pub fn new(img: DynamicImage) -> Self {
        let (width, height) = GenericImageView::dimensions(&img);
        Self {
            img,
            width,
            height,
            center: Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
            panels: Vec::new(),
            plots: Vec::new(),
            photos: Vec::new(),
        }
    }

    /// Set the panel collection.
    pub fn with_panels(mut self, panels: Vec<Region>) -> Self {
        self.panels = panels;
        self
    }

    /// Set the plot collection.
    pub fn with_plots(mut self, plots: Vec<Panel>) -> Self {
        self.plots = plots;
        self
    }

    /// Set the photo collection.
    pub fn with_photos(mut self, photos: Vec<Panel>) -> Self {
        self.photos = photos;
        self
    }

    /// Diagrams in panel order.
    pub fn diagrams(&self) -> impl Iterator<Item = (DiagramId, &Diagram)> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(i, region)| region.as_diagram().map(|d| (DiagramId(i), d)))
    }

    /// Labels in panel order.
    pub fn labels(&self) -> impl Iterator<Item = (LabelId, &Label)> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(i, region)| region.as_label().map(|l| (LabelId(i), l)))
    }

    /// The diagram with the given id.
    pub fn diagram(&self, id: DiagramId) -> Option<&Diagram> {
        self.panels.get(id.0).and_then(Region::as_diagram)
    }

    /// Mutable access to the diagram with the given id.
    pub fn diagram_mut(&mut self, id: DiagramId) -> Option<&mut Diagram> {
        match self.panels.get_mut(id.0) {
            Some(Region::Diagram(d)) => Some(d),
            _ => None,
        }
    }

    /// The label with the given id.
    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.panels.get(id.0).and_then(Region::as_label)
    }

    /// Mutable access to the label with the given id.
    pub fn label_mut(&mut self, id: LabelId) -> Option<&mut Label> {
        match self.panels.get_mut(id.0) {
            Some(Region::Label(l)) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Figure>")
    }
}
