use bevy::prelude::*;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::window::PrimaryWindow;
use bevy_egui::{egui, EguiContexts};

use crate::components::camera::ThirdPersonCamera;
use crate::events::ShakeRequested;
use crate::resources::ShakePresetTable;
use crate::systems::player::apply_cursor_capture;

pub struct DebugUiPlugin;

impl Plugin for DebugUiPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.add_systems(Update, debug_panel);
    }
}

fn debug_panel(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    presets: Res<ShakePresetTable>,
    mut cameras: Query<&mut ThirdPersonCamera>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut shake_events: EventWriter<ShakeRequested>,
) {
    egui::Window::new("Camera Rig").show(contexts.ctx_mut(), |ui| {
        if let Some(fps) = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|diag| diag.smoothed())
        {
            ui.label(format!("FPS: {:.1}", fps));
        }

        for mut camera in &mut cameras {
            let state = *camera.rig.state();
            ui.separator();
            ui.label(format!("Tilt: {:.1}°", state.tilt_angle_deg));
            ui.label(format!("Pending orbit: {:.1}°", state.orbit_angle_deg));
            ui.label(format!("Yaw: {:.1}°", state.pivot_yaw_deg));
            ui.label(format!("Pitch: {:.1}°", state.camera_pitch_deg));
            ui.label(format!("Shake strength: {:.3}", state.shake_strength));
            if camera.rig.is_rotation_settled() {
                ui.label("Rotation: settled");
            } else {
                ui.label(format!("Rotation: easing ({})", camera.rig.active_eases()));
            }
            if ui.button("Retrigger shake").clicked() {
                camera.rig.retrigger_shake();
            }

            let mut follow = camera.rig.mouse_follow();
            if ui.checkbox(&mut follow, "Mouse look").changed() {
                camera.rig.set_mouse_follow(follow);
                if let Ok(mut window) = windows.get_single_mut() {
                    apply_cursor_capture(&mut window, follow);
                }
            }
        }

        ui.separator();
        ui.heading("Shake Presets");

        for (index, preset) in presets.iter().enumerate() {
            let label = format!(
                "#{} volatility {} strength {} decay {}",
                index, preset.volatility, preset.strength, preset.decay_rate
            );
            ui.horizontal(|ui| {
                if ui.button("Shake").clicked() {
                    shake_events.send(ShakeRequested { preset: index });
                }
                if ui.button("Select").clicked() {
                    for mut camera in &mut cameras {
                        if let Err(e) = camera.rig.change_preset_shake(index) {
                            warn!("Ignoring preset selection: {}", e);
                        }
                    }
                }
                ui.label(label);
            });
        }
    });
}
