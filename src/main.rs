//! Spatial Graph Editor.
//!
//! Interaktiver Editor für planare Strassengraphen: Punkte setzen, verbinden,
//! verschieben und löschen.

use eframe::egui;
use spatial_graph_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Spatial Graph Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Standardwerte als editierbare Vorlage ablegen
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
            }
        }

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(editor_options.window_size)
                .with_title("Spatial Graphs"),
            ..Default::default()
        };

        eframe::run_native(
            "Spatial Graphs",
            native_options,
            Box::new(move |cc| {
                let app = EditorApp::new(&cc.egui_ctx, editor_options)?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    textures: render::TextureStore,
    input: ui::InputState,
    /// Bildschirmbereich des Viewports aus dem aktuellen Frame
    viewport_rect: egui::Rect,
}

impl EditorApp {
    /// Lädt die Strassentextur; ohne sie startet der Editor nicht.
    fn new(ctx: &egui::Context, options: EditorOptions) -> anyhow::Result<Self> {
        let mut textures = render::TextureStore::new();
        let road_texture = textures.load(
            ctx,
            &options.road_texture_name,
            std::path::Path::new(&options.road_texture_path),
        )?;

        let mut state = AppState::with_options(options);
        state.graph.set_road_texture(road_texture);

        Ok(Self {
            state,
            controller: AppController::new(),
            textures,
            input: ui::InputState::new(),
            viewport_rect: egui::Rect::NOTHING,
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = !events.is_empty();
        self.process_events(events);
        self.paint_viewport(ctx);

        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.viewport_rect = rect;

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    [rect.width(), rect.height()],
                    &self.state.view.camera,
                    &self.state.options,
                ));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Zeichnet den Zustand nach allen Mutationen dieses Frames.
    fn paint_viewport(&self, ctx: &egui::Context) {
        let scene = self.controller.build_render_scene(&self.state);
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(self.viewport_rect);
        render::paint_scene(&painter, self.viewport_rect, &scene, &self.textures);
    }
}
