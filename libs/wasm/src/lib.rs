//! WASM-facing entry points for the procedural demo geometry.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Generators take an optional JSON options object; native
//! tests drive the `*_internal` helpers, which expose Rust error types and
//! never touch a JS host.
//!
//! ```
//! let mesh = meshgen_wasm::torus_mesh_internal(r#"{"segments": 8, "ringSegments": 4}"#).unwrap();
//! assert_eq!(mesh.buffers().vertex_count(), 8 * 4 * 6);
//! ```

use config::constants::{DEFAULT_PARTICLE_SIZE, DEFAULT_RING_SEGMENTS};
use meshgen::{point_cube, point_sphere, point_svg, points_to_particle, TorusKnot};
use wasm_bindgen::prelude::*;

mod console_log;
mod mesh_handle;
mod options;

pub use console_log::parse_level;
pub use mesh_handle::{AttributeLayout, MeshHandle, MeshLayout, MorphHandle};
pub use options::{CubeOptions, OptionsError, SphereOptions, SvgOptions, TorusOptions};

use options::parse_options;

fn to_js_error(err: OptionsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// =============================================================================
// SETUP
// =============================================================================

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "meshgen_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output at or above `level` to the browser console.
///
/// # Errors
/// Returns a JavaScript error when `level` is not a known level name.
///
/// # Examples
/// ```no_run
/// // In JavaScript: init_logging("debug");
/// ```
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level).map_err(to_js_error)?;
    console_log::install(filter);
    Ok(())
}

/// Returns the default tube cross-section resolution.
///
/// # Examples
/// ```
/// assert_eq!(meshgen_wasm::default_ring_segments(), 20);
/// ```
#[wasm_bindgen]
pub fn default_ring_segments() -> u32 {
    DEFAULT_RING_SEGMENTS
}

/// Returns the default billboard edge length.
#[wasm_bindgen]
pub fn default_particle_size() -> f32 {
    DEFAULT_PARTICLE_SIZE
}

// =============================================================================
// TORUS
// =============================================================================

/// Point on the `(p, q)` torus knot as `[x, y, z]`, e.g. for the bump
/// highlight uniform.
#[wasm_bindgen]
pub fn torus_curve_point(p: f32, q: f32, phi: f32) -> Vec<f32> {
    meshgen::torus_curve(p, q, phi).to_array().to_vec()
}

/// Flat xyz line strip of the knot for line-mode drawing.
#[wasm_bindgen]
pub fn knot_polyline(segments: u32, p: f32, q: f32) -> Vec<f32> {
    meshgen::knot_polyline(segments, p, q)
}

/// Generates a torus knot tube from a [`TorusOptions`] JSON object.
///
/// # Errors
/// Returns a JavaScript error for malformed options or an invalid ring
/// configuration.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = torus_mesh('{"segments": 200, "p": 2, "q": 5}');
/// // console.log(mesh.vertex_count);
/// ```
#[wasm_bindgen]
pub fn torus_mesh(options_json: &str) -> Result<MeshHandle, JsValue> {
    torus_mesh_internal(options_json).map_err(to_js_error)
}

/// Host-side implementation of [`torus_mesh`].
pub fn torus_mesh_internal(options_json: &str) -> Result<MeshHandle, OptionsError> {
    let options: TorusOptions = parse_options(options_json)?;
    let config = options.config()?;
    let knot = TorusKnot::new(options.segments, options.radius, options.p, options.q);
    Ok(MeshHandle::from_buffers(knot.generate(&config)))
}

/// The torus scene's tube.
#[wasm_bindgen]
pub fn torus_scene() -> MeshHandle {
    MeshHandle::from_buffers(meshgen::scenes::torus_scene())
}

// =============================================================================
// PARTICLES
// =============================================================================

/// Billboard cloud sampled on a square tube, from [`CubeOptions`] JSON.
///
/// # Errors
/// Returns a JavaScript error for malformed options or an invalid particle
/// size.
#[wasm_bindgen]
pub fn particle_cube(options_json: &str) -> Result<MeshHandle, JsValue> {
    particle_cube_internal(options_json).map_err(to_js_error)
}

/// Host-side implementation of [`particle_cube`].
pub fn particle_cube_internal(options_json: &str) -> Result<MeshHandle, OptionsError> {
    let options: CubeOptions = parse_options(options_json)?;
    let config = options.config()?;
    let points = point_cube(options.points_per_side, options.width, options.origin);
    Ok(MeshHandle::from_buffers(points_to_particle(&points, &config)))
}

/// Billboard cloud on a spiral sphere, from [`SphereOptions`] JSON.
///
/// # Errors
/// Returns a JavaScript error for malformed options or an invalid particle
/// size.
#[wasm_bindgen]
pub fn particle_sphere(options_json: &str) -> Result<MeshHandle, JsValue> {
    particle_sphere_internal(options_json).map_err(to_js_error)
}

/// Host-side implementation of [`particle_sphere`].
pub fn particle_sphere_internal(options_json: &str) -> Result<MeshHandle, OptionsError> {
    let options: SphereOptions = parse_options(options_json)?;
    let config = options.config()?;
    let points = point_sphere(
        options.total_points,
        options.num_turns,
        options.width,
        options.origin,
    );
    Ok(MeshHandle::from_buffers(points_to_particle(&points, &config)))
}

/// Billboard cloud along an SVG path, from [`SvgOptions`] JSON.
///
/// Malformed path data is not an error: the cloud holds the points read
/// before the problem, which is logged.
///
/// # Errors
/// Returns a JavaScript error for malformed options or an invalid particle
/// size.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = particle_svg(JSON.stringify({ path: "M 0,0 l 10,0 l 0,10", width: 4 }));
/// ```
#[wasm_bindgen]
pub fn particle_svg(options_json: &str) -> Result<MeshHandle, JsValue> {
    particle_svg_internal(options_json).map_err(to_js_error)
}

/// Host-side implementation of [`particle_svg`].
pub fn particle_svg_internal(options_json: &str) -> Result<MeshHandle, OptionsError> {
    let options: SvgOptions = parse_options(options_json)?;
    let config = options.config()?;
    let points = point_svg(&options.path, options.width, options.origin);
    Ok(MeshHandle::from_buffers(points_to_particle(&points, &config)))
}

/// Transition uniform for the particle morph after `timer_ms` milliseconds.
#[wasm_bindgen]
pub fn morph_state(timer_ms: f32) -> f32 {
    meshgen::morph_state(timer_ms)
}

/// The particle scene's cube-to-sphere morph pair.
///
/// # Errors
/// Returns a JavaScript error if the two clouds differ in size.
#[wasm_bindgen]
pub fn particle_morph_scene() -> Result<MorphHandle, JsValue> {
    particle_morph_scene_internal().map_err(to_js_error)
}

/// Host-side implementation of [`particle_morph_scene`].
pub fn particle_morph_scene_internal() -> Result<MorphHandle, OptionsError> {
    Ok(MorphHandle::from(meshgen::scenes::particle_morph_scene()?))
}
