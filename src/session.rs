//! Interactive explorer state.
//!
//! An `ExplorerSession` owns the current root system and everything the
//! viewer can dial: basis, rotation, Wick drift, temperature, the MERA view,
//! a highlighted subgroup and a selected node. A front end calls
//! [`ExplorerSession::tick`] once per animation frame and redraws from
//! [`ExplorerSession::frame`].

use log::{debug, info};
use rand::Rng;

use crate::basis::{petrie_basis, Axis, Basis};
use crate::category::Subgroup;
use crate::config::ExplorerConfig;
use crate::cosmic::{CosmicState, MeraState};
use crate::decay::DecayInteraction;
use crate::error::{LatticeError, LatticeResult};
use crate::groups::LieGroupType;
use crate::projection::{project, project_one, Node2D, Point2, ProjectedPoint, ProjectionParams};
use crate::roots::generate_roots;
use crate::sweep::SweepPoint;
use crate::vector::Root;

/// A resolved decay together with the screen positions needed to animate it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayEvent {
    pub parent_id: usize,
    pub interaction: DecayInteraction,
    /// Where the parent node is currently drawn.
    pub parent_position: Point2,
    /// Screen positions of β and γ.
    pub child_positions: [Point2; 2],
}

#[derive(Debug, Clone)]
pub struct ExplorerSession {
    group: LieGroupType,
    roots: Vec<Root>,
    basis: Basis,
    params: ProjectionParams,
    auto_rotate: bool,
    rotation_speed: f64,
    temperature: f64,
    mera: MeraState,
    subgroup: Option<&'static Subgroup>,
    selected: Option<usize>,
}

impl ExplorerSession {
    pub fn new(config: &ExplorerConfig) -> Self {
        let roots = generate_roots(config.group);
        info!(
            "session started on {} ({} roots, petrie rank {})",
            config.group,
            roots.len(),
            config.group.petrie_rank()
        );
        Self {
            group: config.group,
            roots,
            basis: petrie_basis(config.group.petrie_rank()),
            params: config.projection_params(),
            auto_rotate: config.auto_rotate,
            rotation_speed: config.rotation_speed,
            temperature: config.temperature,
            mera: MeraState {
                is_active: false,
                renormalization_scale: config.renormalization_scale,
                bulk_curvature: config.bulk_curvature,
            },
            subgroup: None,
            selected: None,
        }
    }

    pub fn group(&self) -> LieGroupType {
        self.group
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ProjectionParams {
        &mut self.params
    }

    pub fn mera(&self) -> &MeraState {
        &self.mera
    }

    pub fn mera_mut(&mut self) -> &mut MeraState {
        &mut self.mera
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Switch groups. Regenerates the roots, resets the basis to the group's
    /// Petrie basis and drops the selection.
    pub fn set_group(&mut self, group: LieGroupType) {
        self.group = group;
        self.roots = generate_roots(group);
        self.basis = petrie_basis(group.petrie_rank());
        self.selected = None;
        debug!("group -> {} ({} roots)", group, self.roots.len());
    }

    pub fn reset_basis(&mut self) {
        self.basis = petrie_basis(self.group.petrie_rank());
    }

    pub fn randomize_basis<R: Rng>(&mut self, rng: &mut R) {
        self.basis = Basis::random(rng);
        debug!("randomized basis: x={:?} y={:?}", self.basis.x, self.basis.y);
    }

    pub fn set_basis(&mut self, basis: Basis) {
        self.basis = basis;
    }

    pub fn set_coefficient(&mut self, axis: Axis, index: usize, value: f64) -> LatticeResult<()> {
        self.basis.set_coefficient(axis, index, value)
    }

    pub fn set_auto_rotate(&mut self, on: bool) {
        self.auto_rotate = on;
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Highlight a subgroup by id; `None` or an unknown id shows everything.
    pub fn set_subgroup(&mut self, id: Option<&str>) {
        self.subgroup = id.and_then(Subgroup::by_id);
    }

    pub fn subgroup(&self) -> Option<&'static Subgroup> {
        self.subgroup
    }

    /// Advance one animation frame.
    pub fn tick(&mut self) {
        if self.auto_rotate {
            self.params.angle += self.rotation_speed;
        }
    }

    pub fn frame(&self) -> Vec<ProjectedPoint<'_>> {
        project(&self.roots, &self.basis, &self.params)
    }

    pub fn frame_nodes(&self) -> Vec<Node2D> {
        self.frame().iter().map(|p| p.to_owned_node()).collect()
    }

    /// Projected points whose category belongs to the active subgroup.
    pub fn visible_nodes(&self) -> Vec<ProjectedPoint<'_>> {
        let frame = self.frame();
        match self.subgroup {
            Some(sg) => frame
                .into_iter()
                .filter(|p| sg.contains(p.original.category))
                .collect(),
            None => frame,
        }
    }

    pub fn select(&mut self, id: usize) -> LatticeResult<()> {
        if id >= self.roots.len() {
            return Err(LatticeError::NodeOutOfRange {
                id,
                len: self.roots.len(),
            });
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Split the selected root, if any, into two roots of the current system.
    ///
    /// The parent keeps its on-screen position; the children are placed with
    /// the single-vector projection.
    pub fn decay_selected(&self) -> Option<DecayEvent> {
        let id = self.selected?;
        let parent = self.roots.get(id)?;
        let interaction = DecayInteraction::resolve(parent, &self.roots)?;
        let parent_position = self.frame()[id].position();
        let child_positions = [
            project_one(&interaction.children[0], &self.basis, &self.params),
            project_one(&interaction.children[1], &self.basis, &self.params),
        ];
        debug!(
            "decay of node {}: {} -> {} + {}",
            id, interaction.parent, interaction.children[0], interaction.children[1]
        );
        Some(DecayEvent {
            parent_id: id,
            interaction,
            parent_position,
            child_positions,
        })
    }

    pub fn cosmic_state(&self) -> CosmicState {
        CosmicState::from_temperature(self.temperature)
    }

    pub fn apply_sweep_point(&mut self, point: &SweepPoint) {
        self.temperature = point.temperature;
        self.mera.renormalization_scale = point.renormalization;
        self.params.wick_rotation = point.wick;
    }
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self::new(&ExplorerConfig::default())
    }
}
