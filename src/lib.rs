#![allow(clippy::needless_range_loop)]

//! # Figure Regions
//!
//! Spatial region model and proximity clustering for figure images.
//!
//! Detection stages produce rectangular regions (chemical schematic diagrams,
//! their identifying labels, plots, photos). This crate models those regions
//! and associates each diagram with its nearest label through a minimum
//! spanning tree over center-to-center distances.
//!
//! ## Components
//!
//! - [`geometry`]: rectangles with containment, strict overlap and centroid
//!   separation
//! - [`regions`]: tagged panels, diagrams and labels composed over a rectangle
//! - [`figure`]: container for an image and its detected regions
//! - [`graph`]: weighted graph with Kruskal spanning tree extraction
//! - [`pairing`]: diagram-label association built on the spanning tree
//!
//! ## Quick Start
//!
//! ```
//! use figure_regions::config::PairingConfig;
//! use figure_regions::figure::Figure;
//! use figure_regions::pairing::assign_labels;
//! use figure_regions::regions::{Diagram, DiagramId, Label, LabelId};
//! use image::DynamicImage;
//!
//! let mut figure = Figure::new(DynamicImage::new_luma8(300, 200)).with_panels(vec![
//!     Diagram::new(0.0, 100.0, 0.0, 100.0, 0).into(),
//!     Label::new(40.0, 60.0, 110.0, 130.0, 1).into(),
//! ]);
//!
//! assign_labels(&mut figure, &PairingConfig::default())?;
//! assert_eq!(figure.diagram(DiagramId(0)).unwrap().label, Some(LabelId(1)));
//! # Ok::<(), figure_regions::Error>(())
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Region model
pub mod figure;
pub mod geometry;
pub mod regions;

// Proximity clustering
pub mod graph;
pub mod pairing;

// Configuration
pub mod config;

// Re-exports
pub use config::PairingConfig;
pub use error::{Error, Result};
pub use figure::Figure;
pub use geometry::{Point, Rect};
pub use graph::{Edge, Graph};
pub use pairing::{Pairing, assign_labels, pair_labels};
pub use regions::{Diagram, DiagramId, Label, LabelId, Panel, Region, RegionKind};
