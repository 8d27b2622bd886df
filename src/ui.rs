use egui::Context;

use crate::controller::FrameOutput;
use crate::model::scene;
use crate::model::{CameraMode, Collectible};

/// Lay out the HUD for the current frame
pub fn build_ui(ctx: &Context, frame: &FrameOutput, fps: f32, notices: &[String]) {
    draw_crosshair(ctx);
    draw_debug_window(ctx, frame, fps);
    draw_cards_window(ctx, frame, notices);
}

fn draw_crosshair(ctx: &Context) {
    let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::TOP, egui::Id::new("crosshair")));
    let center = ctx.content_rect().center();
    let size = 10.0;
    let stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    painter.line_segment(
        [egui::Pos2::new(center.x - size, center.y), egui::Pos2::new(center.x + size, center.y)],
        stroke,
    );
    painter.line_segment(
        [egui::Pos2::new(center.x, center.y - size), egui::Pos2::new(center.x, center.y + size)],
        stroke,
    );
}

fn draw_debug_window(ctx: &Context, frame: &FrameOutput, fps: f32) {
    let p = frame.position;
    let mode = match frame.camera_mode {
        CameraMode::Bounded => "bounded",
        CameraMode::FreeFly => "free fly",
    };

    egui::Window::new("Debug")
        .default_pos([8.0, 8.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("FPS: {:.0}", fps)).small());
            ui.label(egui::RichText::new(format!("Pos: x: {:.2} y: {:.2} z: {:.2}", p.x, p.y, p.z)).small());
            ui.label(egui::RichText::new(format!("Yaw: {:.1} Pitch: {:.1}", frame.yaw, frame.pitch)).small());
            ui.label(egui::RichText::new(format!("FOV: {:.0}", frame.zoom)).small());
            ui.label(egui::RichText::new(format!("Camera: {}", mode)).small());
            ui.separator();
            ui.label(egui::RichText::new("Controls:").small());
            ui.label(egui::RichText::new("WASD / arrows - Move").small());
            ui.label(egui::RichText::new("X / Z - Up / Down").small());
            ui.label(egui::RichText::new("Space - Pick up").small());
            ui.label(egui::RichText::new("F - Toggle free fly").small());
            ui.label(egui::RichText::new("Click - Grab mouse, Esc - Quit").small());
        });
}

/// Door and candle lines, read off the props the renderer is given
fn prop_status(frame: &FrameOutput) -> [&'static str; 2] {
    let door = if frame.door == scene::DOOR_OPEN { "Door: open" } else { "Door: locked" };
    let candle = if frame.candle.is_some() { "Candle: lit" } else { "Candle: put away" };
    [door, candle]
}

fn draw_cards_window(ctx: &Context, frame: &FrameOutput, notices: &[String]) {
    let state = &frame.progression;
    egui::Window::new("Cards")
        .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
        .show(ctx, |ui| {
            for card in Collectible::ALL {
                let mark = if state.is_collected(card) { "[x]" } else { "[ ]" };
                ui.label(egui::RichText::new(format!("{} {}", mark, card.label())).small());
            }
            ui.separator();
            for line in prop_status(frame) {
                ui.label(egui::RichText::new(line).small());
            }
            for notice in notices {
                ui.label(egui::RichText::new(notice).small().color(egui::Color32::YELLOW));
            }
        });
}
