//! Background projection worker thread.
//!
//! Runs projections, decays and sweeps off the render thread. Requests are
//! handled in order; the thread exits once the worker handle is dropped.

use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::thread;

use crate::basis::Basis;
use crate::cosmic::CosmicState;
use crate::decay::DecayInteraction;
use crate::groups::LieGroupType;
use crate::projection::{project, project_one, Node2D, Point2, ProjectionParams};
use crate::roots::generate_roots;
use crate::sweep::{ParameterSweep, SweepPoint};
use crate::vector::Root;

/// Request sent to the worker.
#[derive(Debug, Clone)]
pub enum ProjectionRequest {
    /// Project every root of `group`.
    Project {
        group: LieGroupType,
        basis: Basis,
        params: ProjectionParams,
    },
    /// Decay the root at `index` and place the products.
    Decay {
        group: LieGroupType,
        index: usize,
        basis: Basis,
        params: ProjectionParams,
    },
    /// Render one frame per sweep preset.
    Sweep {
        group: LieGroupType,
        basis: Basis,
        params: ProjectionParams,
        sweep: ParameterSweep,
    },
}

/// Decay products with their screen positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayNodes {
    pub interaction: DecayInteraction,
    pub parent: Point2,
    pub children: [Point2; 2],
}

/// One rendered preset of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepFrame {
    pub point: SweepPoint,
    pub cosmic: CosmicState,
    pub nodes: Vec<Node2D>,
}

/// Response sent back from the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionResponse {
    Frame(Vec<Node2D>),
    Decay(Option<DecayNodes>),
    Sweep(Vec<SweepFrame>),
    /// The request could not be served; carries the reason.
    Rejected(String),
}

/// Handle to communicate with the background worker.
pub struct ProjectionWorker {
    pub tx: Sender<ProjectionRequest>,
    pub rx: Receiver<ProjectionResponse>,
}

impl ProjectionWorker {
    /// Spawn the background worker thread.
    pub fn spawn() -> Self {
        let (req_tx, req_rx) = crossbeam_channel::unbounded::<ProjectionRequest>();
        let (resp_tx, resp_rx) = crossbeam_channel::unbounded::<ProjectionResponse>();

        thread::spawn(move || {
            while let Ok(req) = req_rx.recv() {
                let resp = handle(req);
                if resp_tx.send(resp).is_err() {
                    break;
                }
            }
            debug!("projection worker exiting");
        });

        ProjectionWorker {
            tx: req_tx,
            rx: resp_rx,
        }
    }

    /// Send a request (non-blocking).
    pub fn send(&self, req: ProjectionRequest) {
        let _ = self.tx.send(req);
    }

    /// Try to receive a response (non-blocking).
    pub fn try_recv(&self) -> Option<ProjectionResponse> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next response. `None` once the worker is gone.
    pub fn recv(&self) -> Option<ProjectionResponse> {
        self.rx.recv().ok()
    }
}

fn handle(req: ProjectionRequest) -> ProjectionResponse {
    match req {
        ProjectionRequest::Project {
            group,
            basis,
            params,
        } => {
            let roots = generate_roots(group);
            ProjectionResponse::Frame(render(&roots, &basis, &params))
        }
        ProjectionRequest::Decay {
            group,
            index,
            basis,
            params,
        } => {
            let roots = generate_roots(group);
            let Some(parent) = roots.get(index) else {
                warn!("decay request for node {} of {} ({} roots)", index, group, roots.len());
                return ProjectionResponse::Rejected(format!(
                    "node {} out of range for {} ({} roots)",
                    index,
                    group,
                    roots.len()
                ));
            };
            let nodes = DecayInteraction::resolve(parent, &roots).map(|interaction| {
                let parent = project(&roots, &basis, &params)[index].position();
                let children = [
                    project_one(&interaction.children[0], &basis, &params),
                    project_one(&interaction.children[1], &basis, &params),
                ];
                DecayNodes {
                    interaction,
                    parent,
                    children,
                }
            });
            ProjectionResponse::Decay(nodes)
        }
        ProjectionRequest::Sweep {
            group,
            basis,
            params,
            sweep,
        } => {
            let points = match sweep.points() {
                Ok(points) => points,
                Err(e) => return ProjectionResponse::Rejected(e.to_string()),
            };
            let roots = generate_roots(group);
            let frames = points
                .into_iter()
                .map(|point| {
                    let params = ProjectionParams {
                        wick_rotation: point.wick,
                        ..params
                    };
                    SweepFrame {
                        point,
                        cosmic: CosmicState::from_temperature(point.temperature),
                        nodes: render(&roots, &basis, &params),
                    }
                })
                .collect();
            ProjectionResponse::Sweep(frames)
        }
    }
}

fn render(roots: &[Root], basis: &Basis, params: &ProjectionParams) -> Vec<Node2D> {
    project(roots, basis, params)
        .iter()
        .map(|p| p.to_owned_node())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::petrie_basis;
    use crate::cosmic::Era;
    use crate::sweep::SweepParameter;

    #[test]
    fn project_request_returns_frame() {
        let worker = ProjectionWorker::spawn();
        worker.send(ProjectionRequest::Project {
            group: LieGroupType::F4,
            basis: petrie_basis(4),
            params: ProjectionParams::default(),
        });
        match worker.recv() {
            Some(ProjectionResponse::Frame(nodes)) => {
                assert_eq!(nodes.len(), 48);
                assert!(nodes.iter().enumerate().all(|(i, n)| n.id == i));
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn decay_request() {
        let worker = ProjectionWorker::spawn();
        worker.send(ProjectionRequest::Decay {
            group: LieGroupType::E8,
            index: 0,
            basis: Basis::reference(),
            params: ProjectionParams::default(),
        });
        match worker.recv() {
            Some(ProjectionResponse::Decay(Some(d))) => {
                assert_eq!(d.parent, Point2 { x: 1.0, y: 1.0 });
                // β = (1,0,1,0,…), γ = (0,1,−1,0,…) under the reference basis
                assert_eq!(d.children[0], Point2 { x: 1.0, y: 0.0 });
                assert_eq!(d.children[1], Point2 { x: 0.0, y: 1.0 });
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn out_of_range_decay_is_rejected() {
        let worker = ProjectionWorker::spawn();
        worker.send(ProjectionRequest::Decay {
            group: LieGroupType::G2,
            index: 12,
            basis: Basis::reference(),
            params: ProjectionParams::default(),
        });
        assert!(matches!(worker.recv(), Some(ProjectionResponse::Rejected(_))));
    }

    #[test]
    fn sweep_request_orders_frames() {
        let worker = ProjectionWorker::spawn();
        worker.send(ProjectionRequest::Sweep {
            group: LieGroupType::G2,
            basis: petrie_basis(2),
            params: ProjectionParams::default(),
            sweep: ParameterSweep::default(),
        });
        match worker.recv() {
            Some(ProjectionResponse::Sweep(frames)) => {
                assert_eq!(frames.len(), 5);
                assert_eq!(frames[0].cosmic.era, Era::Current);
                assert_eq!(frames[4].cosmic.era, Era::Planck);
                assert!(frames.iter().all(|f| f.nodes.len() == 12));
            }
            other => panic!("unexpected response {:?}", other),
        }

        worker.send(ProjectionRequest::Sweep {
            group: LieGroupType::G2,
            basis: petrie_basis(2),
            params: ProjectionParams::default(),
            sweep: ParameterSweep {
                parameter: SweepParameter::Wick,
                steps: 0,
                ..Default::default()
            },
        });
        assert!(matches!(worker.recv(), Some(ProjectionResponse::Rejected(_))));
    }

    #[test]
    fn try_recv_is_empty_before_any_request() {
        let worker = ProjectionWorker::spawn();
        assert!(worker.try_recv().is_none());
    }
}
