use bevy_egui::{egui, EguiContexts};

/// Warm wood-and-brass look for the HUD windows.
pub fn apply_tavern_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let wood = egui::Color32::from_rgb(52, 38, 30);
    let plank = egui::Color32::from_rgb(74, 54, 40);
    let brass = egui::Color32::from_rgb(196, 150, 70);

    style.visuals.window_fill = wood;
    style.visuals.panel_fill = wood;
    style.visuals.widgets.noninteractive.bg_fill = wood;
    style.visuals.widgets.inactive.bg_fill = plank;
    style.visuals.widgets.inactive.weak_bg_fill = plank;
    style.visuals.widgets.active.bg_fill = brass;
    style.visuals.window_stroke = egui::Stroke::new(1.5, brass);
    style.visuals.override_text_color = Some(egui::Color32::from_rgb(245, 232, 205));
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);

    ctx.set_style(style);
}
