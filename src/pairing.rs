//! Diagram-label pairing by proximity.
//!
//! For every diagram a complete graph is built over the diagram and all
//! candidate labels, weighted by center separation. The diagram's lightest
//! spanning-tree edge names its label.

use crate::config::PairingConfig;
use crate::error::Result;
use crate::figure::Figure;
use crate::geometry::Rect;
use crate::graph::Graph;
use crate::regions::{DiagramId, LabelId};

/// A diagram associated with its nearest label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pairing {
    /// The diagram
    pub diagram: DiagramId,
    /// Its label
    pub label: LabelId,
    /// Center-to-center distance between the two
    pub separation: f64,
}

/// Find the label closest to `diagram`.
///
/// Returns `None` if there are no labels, the closest one is farther than
/// `config.max_separation`, or its separation is NaN (malformed geometry).
/// When several labels are equally close, the first one given wins.
///
/// # Examples
///
/// ```
/// use figure_regions::config::PairingConfig;
/// use figure_regions::geometry::Rect;
/// use figure_regions::pairing::nearest_label;
/// use figure_regions::regions::LabelId;
///
/// let diagram = Rect::new(0.0, 100.0, 0.0, 100.0);
/// let near = Rect::new(40.0, 60.0, 110.0, 120.0);
/// let far = Rect::new(300.0, 320.0, 110.0, 120.0);
///
/// let found = nearest_label(&diagram, [(LabelId(1), &far), (LabelId(2), &near)], &PairingConfig::default())?;
/// assert_eq!(found.map(|(id, _)| id), Some(LabelId(2)));
/// # Ok::<(), figure_regions::Error>(())
/// ```
pub fn nearest_label<'a, I>(
    diagram: &Rect,
    labels: I,
    config: &PairingConfig,
) -> Result<Option<(LabelId, f64)>>
where
    I: IntoIterator<Item = (LabelId, &'a Rect)>,
{
    let candidates: Vec<(LabelId, &Rect)> = labels.into_iter().collect();
    if candidates.is_empty() {
        return Ok(None);
    }

    // Vertex 0 is the diagram, vertex i + 1 is candidates[i].
    let rects: Vec<&Rect> = std::iter::once(diagram)
        .chain(candidates.iter().map(|(_, rect)| *rect))
        .collect();

    let mut graph = Graph::new(rects.len()).with_path_compression(config.path_compression);
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            graph.add_edge(i, j, rects[i].separation(rects[j]))?;
        }
    }

    let tree = graph.kruskal()?;

    // Accepted edges come in non-decreasing weight order.
    let Some(edge) = tree.iter().find(|e| e.touches(0)) else {
        return Ok(None);
    };
    let Some(vertex) = edge.other(0) else {
        return Ok(None);
    };
    let (label, _) = candidates[vertex - 1];

    if edge.weight.is_nan() {
        log::debug!("Nearest label {} has no defined separation", label);
        return Ok(None);
    }

    if let Some(limit) = config.max_separation {
        if edge.weight > limit {
            log::debug!(
                "Nearest label {} at {:.2} exceeds max separation {:.2}",
                label,
                edge.weight,
                limit
            );
            return Ok(None);
        }
    }

    Ok(Some((label, edge.weight)))
}

/// Pair every diagram in `figure` with its nearest label.
///
/// Diagrams without a suitable label are left out of the result.
pub fn pair_labels(figure: &Figure, config: &PairingConfig) -> Result<Vec<Pairing>> {
    let labels: Vec<(LabelId, Rect)> = figure.labels().map(|(id, l)| (id, *l.rect())).collect();
    let mut pairings = Vec::new();

    for (id, diagram) in figure.diagrams() {
        if config.skip_repeating && diagram.panel.repeating {
            log::debug!("Skipping repeating diagram {}", id);
            continue;
        }

        let candidates = labels.iter().map(|(label, rect)| (*label, rect));
        match nearest_label(diagram.rect(), candidates, config)? {
            Some((label, separation)) => {
                log::trace!("Diagram {} -> label {} ({:.2})", id, label, separation);
                pairings.push(Pairing {
                    diagram: id,
                    label,
                    separation,
                });
            },
            None => log::debug!("No label found for diagram {}", id),
        }
    }

    log::debug!(
        "Paired {} of {} diagrams with {} labels",
        pairings.len(),
        figure.diagrams().count(),
        labels.len()
    );
    Ok(pairings)
}

/// Pair diagrams with labels and store the result in each [`Diagram::label`].
///
/// Returns the number of diagrams that received a label. Diagrams that were
/// not paired keep their previous label.
///
/// [`Diagram::label`]: crate::regions::Diagram::label
pub fn assign_labels(figure: &mut Figure, config: &PairingConfig) -> Result<usize> {
    let pairings = pair_labels(figure, config)?;
    for pairing in &pairings {
        if let Some(diagram) = figure.diagram_mut(pairing.diagram) {
            diagram.label = Some(pairing.label);
        }
    }
    Ok(pairings.len())
}
