//! Tagged regions detected inside a figure.
//!
//! Every region wraps a [`Panel`], which pairs a bounding [`Rect`] with the tag
//! assigned by the detection stage. Diagrams and labels add the mutable fields
//! that later passes (pairing, OCR, structure recognition) fill in.
//!
//! Regions deliberately have no value equality: two diagrams with identical
//! geometry are still two distinct regions. Identity is the position in the
//! owning collection, expressed as [`DiagramId`] / [`LabelId`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Index of a diagram in [`Figure::panels`](crate::figure::Figure::panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiagramId(pub usize);

/// Index of a label in [`Figure::panels`](crate::figure::Figure::panels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LabelId(pub usize);

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a detected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    /// Chemical schematic diagram
    Diagram,
    /// Identifier label for a diagram
    Label,
    /// Chart or plot
    Plot,
    /// Photograph
    Photo,
}

/// A tagged rectangular section inside a figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    /// Bounding box of the region
    pub bbox: Rect,
    /// Tag assigned by the detection stage
    pub tag: u32,
    /// Whether the region belongs to a repeating pattern
    pub repeating: bool,
}

impl Panel {
    /// Create a panel from its four edges and tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use figure_regions::regions::Panel;
    ///
    /// let panel = Panel::new(0.0, 40.0, 0.0, 30.0, 7);
    /// assert_eq!(panel.tag, 7);
    /// assert!(!panel.repeating);
    /// assert_eq!(panel.bbox.area(), 1200.0);
    /// ```
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, tag: u32) -> Self {
        Self::from_rect(Rect::new(left, right, top, bottom), tag)
    }

    /// Create a panel from an existing rectangle.
    pub fn from_rect(bbox: Rect, tag: u32) -> Self {
        Self {
            bbox,
            tag,
            repeating: false,
        }
    }

    /// Bounding box of the panel.
    pub fn rect(&self) -> &Rect {
        &self.bbox
    }

    /// Mark or unmark the panel as part of a repeating pattern.
    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bbox.fmt_tagged("Panel", f)
    }
}

/// A chemical schematic diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    /// Tagged geometry
    pub panel: Panel,
    /// Label associated with this diagram, if any
    pub label: Option<LabelId>,
    /// Recognised structure as a SMILES string
    pub smile: Option<String>,
}

impl Diagram {
    /// Create a diagram with no label and no recognised structure.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, tag: u32) -> Self {
        Self::from_panel(Panel::new(left, right, top, bottom, tag))
    }

    /// Create a diagram wrapping an existing panel.
    pub fn from_panel(panel: Panel) -> Self {
        Self {
            panel,
            label: None,
            smile: None,
        }
    }

    /// Set the associated label.
    pub fn with_label(mut self, label: LabelId) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the recognised structure.
    pub fn with_smile(mut self, smile: impl Into<String>) -> Self {
        self.smile = Some(smile.into());
        self
    }

    /// Bounding box of the diagram.
    pub fn rect(&self) -> &Rect {
        &self.panel.bbox
    }
}

/// Prints `<Diagram (label, smile)>`, where `label` is the [`LabelId`] index
/// into the figure's panels, not the label's tag.
impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Diagram (")?;
        match self.label {
            Some(label) => write!(f, "{}", label)?,
            None => write!(f, "None")?,
        }
        match &self.smile {
            Some(smile) => write!(f, ", {})>", smile),
            None => write!(f, ", None)>"),
        }
    }
}

/// An identifier label for the closest diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Tagged geometry
    pub panel: Panel,
    /// Recognised label text
    pub text: Option<String>,
}

impl Label {
    /// Create a label with no recognised text.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, tag: u32) -> Self {
        Self::from_panel(Panel::new(left, right, top, bottom, tag))
    }

    /// Create a label wrapping an existing panel.
    pub fn from_panel(panel: Panel) -> Self {
        Self { panel, text: None }
    }

    /// Bounding box of the label.
    pub fn rect(&self) -> &Rect {
        &self.panel.bbox
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.panel.bbox.fmt_tagged("Label", f)
    }
}

/// Any region that can appear in a figure's panel collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Region {
    /// Chemical schematic diagram
    Diagram(Diagram),
    /// Diagram label
    Label(Label),
    /// Chart or plot
    Plot(Panel),
    /// Photograph
    Photo(Panel),
}

impl Region {
    /// Kind of this region.
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Diagram(_) => RegionKind::Diagram,
            Region::Label(_) => RegionKind::Label,
            Region::Plot(_) => RegionKind::Plot,
            Region::Photo(_) => RegionKind::Photo,
        }
    }

    /// Tagged geometry of this region.
    pub fn panel(&self) -> &Panel {
        match self {
            Region::Diagram(d) => &d.panel,
            Region::Label(l) => &l.panel,
            Region::Plot(p) | Region::Photo(p) => p,
        }
    }

    /// Mutable tagged geometry, for toggling `repeating`.
    pub fn panel_mut(&mut self) -> &mut Panel {
        match self {
            Region::Diagram(d) => &mut d.panel,
            Region::Label(l) => &mut l.panel,
            Region::Plot(p) | Region::Photo(p) => p,
        }
    }

    /// Bounding box of this region.
    pub fn rect(&self) -> &Rect {
        &self.panel().bbox
    }

    /// The diagram, if this region is one.
    pub fn as_diagram(&self) -> Option<&Diagram> {
        match self {
            Region::Diagram(d) => Some(d),
            _ => None,
        }
    }

    /// The label, if this region is one.
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Region::Label(l) => Some(l),
            _ => None,
        }
    }
}

impl From<Diagram> for Region {
    fn from(diagram: Diagram) -> Self {
        Region::Diagram(diagram)
    }
}

impl From<Label> for Region {
    fn from(label: Label) -> Self {
        Region::Label(label)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Diagram(d) => fmt::Display::fmt(d, f),
            Region::Label(l) => fmt::Display::fmt(l, f),
            Region::Plot(p) => p.bbox.fmt_tagged("Plot", f),
            Region::Photo(p) => p.bbox.fmt_tagged("Photo", f),
        }
    }
}
