use anyhow::{anyhow, Result};
use glam::Mat4;
use instant::Instant;
use pickballs_core::{
    default_targets, pick, pick_with, report, targets_from_packed, Hit, MatrixCamera,
    PerspectiveCamera, PickError, Selection, Target, Viewport,
};

use crate::constants::{HIGHLIGHT_ALL_HITS, MAT4_LEN};
use crate::highlight::HighlightSet;

/// Session state shared by the pointer handlers and the JS bindings.
///
/// Nothing here touches the DOM.
pub struct SceneState {
    pub camera: MatrixCamera,
    /// Set while no host camera has arrived; its aspect tracks the canvas.
    demo_camera: Option<PerspectiveCamera>,
    pub targets: Vec<Target>,
    pub selection: Selection,
    pub highlight: HighlightSet,
}

impl SceneState {
    /// Demo camera and ball layout, used until the host pushes its own.
    pub fn demo(aspect: f32) -> Self {
        let demo_camera = PerspectiveCamera::demo(aspect);
        Self {
            camera: MatrixCamera::from(&demo_camera),
            demo_camera: Some(demo_camera),
            targets: default_targets(),
            selection: selection_for(HIGHLIGHT_ALL_HITS),
            highlight: HighlightSet::default(),
        }
    }

    pub fn set_camera(&mut self, view: &[f32], projection: &[f32]) -> Result<()> {
        let view = mat4_from_slice("view", view)?;
        let projection = mat4_from_slice("projection", projection)?;
        self.camera = MatrixCamera::new(view, projection);
        self.demo_camera = None;
        Ok(())
    }

    /// Replace the scene's balls. Highlights refer to the old ids, so they go.
    pub fn set_packed_targets(&mut self, packed: &[f32]) -> Result<()> {
        self.targets = targets_from_packed(packed)?;
        self.highlight.clear();
        log::info!("[scene] {} targets", self.targets.len());
        Ok(())
    }

    pub fn set_highlight_all(&mut self, all: bool) {
        self.selection = selection_for(all);
    }

    pub fn uses_demo_camera(&self) -> bool {
        self.demo_camera.is_some()
    }

    /// Keep the demo camera's aspect in step with the canvas.
    pub fn fit_viewport(&mut self, viewport: &Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        if let Some(cam) = self.demo_camera.as_mut() {
            let aspect = viewport.aspect();
            if cam.aspect != aspect {
                cam.aspect = aspect;
                self.camera = MatrixCamera::from(&*cam);
            }
        }
    }

    /// Nearest ball under the pointer, leaving highlights alone.
    pub fn pick(
        &mut self,
        x: f32,
        y: f32,
        viewport: &Viewport,
    ) -> Result<Option<Hit>, PickError> {
        self.fit_viewport(viewport);
        pick(x, y, viewport, &self.camera, &self.targets)
    }

    /// Pick under the pointer and light what was hit.
    ///
    /// Returns whether the highlight set changed. Rejected picks are logged
    /// and leave the highlights alone.
    pub fn pointer_down(&mut self, x: f32, y: f32, viewport: &Viewport) -> bool {
        let started = Instant::now();
        self.fit_viewport(viewport);
        let hits = match pick_with(x, y, viewport, &self.camera, &self.targets, self.selection) {
            Ok(hits) => hits,
            Err(e) => {
                log::warn!("[pick] ignored pointer at ({:.1},{:.1}): {}", x, y, e);
                return false;
            }
        };
        log::debug!(
            "[pick] {} hit(s) among {} targets in {:?}",
            hits.len(),
            self.targets.len(),
            started.elapsed()
        );
        for hit in &hits {
            if let Some(r) = report(hit, &self.targets, &self.camera) {
                log::info!(
                    "[pick] target {} ndc=({:.3},{:.3},{:.3}) camera=({:.2},{:.2},{:.2}) world=({:.2},{:.2},{:.2}) distance={:.4}",
                    r.id,
                    r.ndc.x, r.ndc.y, r.ndc.z,
                    r.camera_space.x, r.camera_space.y, r.camera_space.z,
                    r.world.x, r.world.y, r.world.z,
                    r.distance
                );
            }
        }
        self.highlight.light(&hits)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.highlight.clear()
    }
}

fn selection_for(all: bool) -> Selection {
    if all {
        Selection::All
    } else {
        Selection::Nearest
    }
}

/// Error message with its full cause chain, as shown to JS callers.
pub fn error_text<E: Into<anyhow::Error>>(e: E) -> String {
    format!("{:#}", e.into())
}

/// Read a column-major 4x4 matrix as sent from JS.
pub fn mat4_from_slice(name: &str, values: &[f32]) -> Result<Mat4> {
    if values.len() != MAT4_LEN {
        return Err(anyhow!(
            "{} matrix needs {} floats, got {}",
            name,
            MAT4_LEN,
            values.len()
        ));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(anyhow!("{} matrix has non-finite entries", name));
    }
    Ok(Mat4::from_cols_slice(values))
}
