use eframe::egui;
use liftline_core::demo::demo_resort;
use liftline_core::loader;
use liftline_core::model::MapState;
use liftline_core::views::{detail_panel, markers, path_overlay};
use liftline_protocol::{LiftStatus, Point, SharedStr, ThemeToken, Viewport};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Main application state.
///
/// `state` holds the lift collection and the selected id; `hovered` is
/// renderer-local and only controls which detail panel shows, so hovering
/// never touches the selection.
pub struct MapApp {
    state: MapState,
    theme_mode: ThemeMode,
    hovered: Option<SharedStr>,
    error: Option<String>,
}

impl MapApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::dark_visuals());
        theme::apply_typography(&cc.egui_ctx);
        Self {
            state: MapState::new(demo_resort()),
            theme_mode: ThemeMode::Dark,
            hovered: None,
            error: None,
        }
    }

    fn open_resort_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Resort map", &["json"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(data) => match loader::load_resort(&data) {
                Ok(map) => {
                    log::info!("loaded {} lifts from {}", map.len(), path.display());
                    self.state = MapState::new(map);
                    self.hovered = None;
                    self.error = None;
                }
                Err(e) => {
                    log::warn!("{e}");
                    self.error = Some(format!("Failed to load {}: {e}", path.display()));
                }
            },
            Err(e) => {
                self.error = Some(format!("Failed to read {}: {e}", path.display()));
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Dark => {
                ctx.set_visuals(theme::light_visuals());
                ThemeMode::Light
            }
            ThemeMode::Light => {
                ctx.set_visuals(theme::dark_visuals());
                ThemeMode::Dark
            }
        };
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("⛷ liftline");
                ui.separator();

                if ui.button("📂 Open").clicked() {
                    self.open_resort_file();
                }

                let theme_label = match self.theme_mode {
                    ThemeMode::Dark => "☀ Light",
                    ThemeMode::Light => "🌙 Dark",
                };
                if ui.button(theme_label).clicked() {
                    self.toggle_theme(ctx);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(name) = &self.state.map().meta.name {
                        ui.label(name);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                } else {
                    let map = self.state.map();
                    let open = map.count_by_status(LiftStatus::Open);
                    let text = match self.state.selected_lift() {
                        Some(lift) => format!(
                            "{} lifts | {} open | selected: {}",
                            map.len(),
                            open,
                            lift.name
                        ),
                        None => format!(
                            "{} lifts | {} open | click a lift to highlight its route",
                            map.len(),
                            open
                        ),
                    };
                    ui.label(text);
                }
            });
        });

        // Lift list: clicking a row selects; re-clicking keeps the selection.
        egui::SidePanel::left("lift_list")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Lifts");
                ui.separator();

                let mut clicked: Option<SharedStr> = None;
                for lift in &self.state.map().lifts {
                    let selected = self.state.is_selected(&lift.id);
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            theme::resolve(lift.status.token(), self.theme_mode),
                            "●",
                        );
                        let label = format!("{} {}", lift.kind.glyph(), lift.name);
                        if ui.selectable_label(selected, label).clicked() {
                            clicked = Some(lift.id.clone());
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.weak(lift.wait_label());
                            },
                        );
                    });
                }
                if let Some(id) = clicked {
                    self.state.select(&id);
                }
            });

        // Central panel: map canvas
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(available, egui::Sense::hover());
            let painter = ui.painter_at(available);

            painter.rect_filled(
                available,
                egui::CornerRadius::ZERO,
                theme::resolve(ThemeToken::Background, self.theme_mode),
            );
            painter.rect_stroke(
                available,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(1.0, theme::resolve(ThemeToken::Border, self.theme_mode)),
                egui::StrokeKind::Inside,
            );

            let viewport = Viewport::new(
                f64::from(available.width()),
                f64::from(available.height()),
            );
            let mut commands = path_overlay::render_path_overlay(
                self.state.map(),
                self.state.selected_id(),
                &viewport,
            );
            commands.extend(markers::render_markers(
                self.state.map(),
                self.state.selected_id(),
                &viewport,
            ));

            let result =
                renderer::render_commands(&painter, &commands, available.min, self.theme_mode);

            // Hovering a marker reveals its detail panel; the selection is
            // untouched. Scan regions back-to-front so the topmost marker wins.
            self.hovered = response.hover_pos().and_then(|pos| {
                result
                    .hit_regions
                    .iter()
                    .rev()
                    .find(|hit| hit.rect.contains(pos))
                    .map(|hit| hit.lift_id.clone())
            });

            if let Some(lift) = self
                .hovered
                .as_deref()
                .and_then(|id| self.state.map().lift(id))
            {
                let scale = viewport.map_scale(&self.state.map().meta);
                let anchor = lift.anchor().scaled(scale);

                // Hover ring around the marker.
                painter.circle_stroke(
                    egui::pos2(
                        available.min.x + anchor.x as f32,
                        available.min.y + anchor.y as f32,
                    ),
                    (markers::SELECTED_RADIUS + 3.0) as f32,
                    egui::Stroke::new(
                        2.0,
                        theme::resolve(ThemeToken::HoverHighlight, self.theme_mode),
                    ),
                );

                let x = (anchor.x + 14.0)
                    .min(viewport.width - detail_panel::PANEL_WIDTH - 4.0)
                    .max(0.0);
                let y = (anchor.y + 14.0)
                    .min(viewport.height - detail_panel::PANEL_HEIGHT - 4.0)
                    .max(0.0);
                let panel = detail_panel::render_detail(lift, Point::new(x, y));
                renderer::render_commands(&painter, &panel, available.min, self.theme_mode);
            }
        });
    }
}
