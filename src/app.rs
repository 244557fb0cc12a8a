//! eframe application: header actions, two entry panels, note form.

use eframe::egui;

use crate::collector::{self, SystemReport};
use crate::entry::Entry;
use crate::list::EntryList;
use crate::logging::log_to_file;
use crate::storage::{self, DEFAULT_ICON};
use crate::theme::{self, blend, ThemeColors};

const DEFAULT_ICON_BYTES: &[u8] = include_bytes!("../assets/icon.png");

#[derive(Clone, Copy)]
enum PanelSide {
    Left,
    Right,
}

enum PendingAction {
    MoveUp(PanelSide, usize),
    MoveDown(PanelSide, usize),
    SetVisible(PanelSide, usize, bool),
}

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warn,
    Error,
}

impl Tone {
    fn color(self, tc: &ThemeColors) -> egui::Color32 {
        match self {
            Tone::Info => tc.teal,
            Tone::Success => tc.green,
            Tone::Warn => tc.yellow,
            Tone::Error => tc.red,
        }
    }
}

pub struct SpecSheetApp {
    colors: ThemeColors,
    needs_theme_apply: bool,
    report: SystemReport,
    left: EntryList,
    right: EntryList,
    icon: String,
    icon_texture: Option<egui::TextureHandle>,
    note_title: String,
    note_content: String,
    status: Option<(String, Tone)>,
}

impl SpecSheetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let report = collector::collect();

        let (left, right) = match storage::load_entries() {
            Ok((left, right)) => {
                log_to_file("Loaded saved layout");
                (EntryList::from_entries(left), EntryList::from_entries(right))
            }
            Err(e) => {
                log_to_file(&format!("No saved layout ({}), collecting fresh", e));
                (
                    EntryList::from_entries(collector::collect_hardware(&report)),
                    EntryList::from_entries(collector::collect_system(&report)),
                )
            }
        };

        let icon = storage::load_icon().unwrap_or_else(|_| DEFAULT_ICON.to_string());
        let icon_texture = load_icon_texture(&cc.egui_ctx, &icon);

        SpecSheetApp {
            colors: theme::colors(),
            needs_theme_apply: true,
            report,
            left,
            right,
            icon,
            icon_texture,
            note_title: String::new(),
            note_content: String::new(),
            status: None,
        }
    }

    fn list_mut(&mut self, side: PanelSide) -> &mut EntryList {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    fn save(&mut self) {
        let entries_res = storage::save_entries(self.left.entries(), self.right.entries());
        let icon_res = storage::save_icon(&self.icon);
        self.status = Some(match (entries_res, icon_res) {
            (Ok(()), Ok(true)) => {
                log_to_file("Saved layout and icon");
                ("Layout and icon saved".to_string(), Tone::Success)
            }
            (Ok(()), Ok(false)) => {
                log_to_file("Saved layout");
                ("Layout saved".to_string(), Tone::Success)
            }
            (Ok(()), Err(e)) => {
                log_to_file(&format!("Icon save failed: {}", e));
                ("Partially saved: icon failed".to_string(), Tone::Warn)
            }
            (Err(e), Ok(true)) => {
                log_to_file(&format!("Entry save failed: {}", e));
                ("Partially saved: entries failed".to_string(), Tone::Warn)
            }
            (Err(e), _) => {
                log_to_file(&format!("Save failed: {}", e));
                ("Save failed".to_string(), Tone::Error)
            }
        });
    }

    fn pick_icon(&mut self, ctx: &egui::Context) {
        let start = dirs::home_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "jpe", "gif", "bmp"])
            .set_directory(start)
            .pick_file();
        if let Some(path) = picked {
            self.icon = path.display().to_string();
            self.icon_texture = load_icon_texture(ctx, &self.icon);
            self.status = Some(("Icon updated".to_string(), Tone::Info));
            log_to_file(&format!("Icon set to {}", self.icon));
        }
    }

    fn recollect(&mut self) {
        self.report = collector::collect();
        self.left.clear_collected();
        for entry in collector::collect_hardware(&self.report) {
            self.left.push(entry);
        }
        self.right.clear_collected();
        for entry in collector::collect_system(&self.report) {
            self.right.push(entry);
        }
        self.status = Some(("Hardware info refreshed".to_string(), Tone::Info));
        log_to_file("Recollected hardware info");
    }

    fn add_note(&mut self) {
        let title = self.note_title.trim();
        let content = self.note_content.trim();
        if title.is_empty() && content.is_empty() {
            return;
        }
        self.right.push(Entry::note(title, content));
        self.note_title.clear();
        self.note_content.clear();
        self.status = Some(("Note added".to_string(), Tone::Info));
        log_to_file("Added user note");
    }
}

impl eframe::App for SpecSheetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.needs_theme_apply {
            theme::apply_theme(ctx, &self.colors);
            self.needs_theme_apply = false;
        }

        let tc = self.colors;
        let editing = self.left.edit_mode;

        let mut clicked_save = false;
        let mut clicked_icon = false;
        let mut clicked_edit = false;
        let mut clicked_recollect = false;
        let mut add_note = false;
        let mut pending: Option<PendingAction> = None;

        // ── Header ──
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(tc.bg_surface)
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .stroke(egui::Stroke::new(1.0, tc.border)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Spec Sheet")
                            .strong()
                            .size(20.0)
                            .color(tc.accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(11.0)
                            .color(tc.text_muted),
                    );

                    ui.add_space(12.0);
                    if header_button(ui, &tc, "Save", false) {
                        clicked_save = true;
                    }
                    if header_button(ui, &tc, "Set Icon", false) {
                        clicked_icon = true;
                    }
                    let edit_label = if editing { "Done Editing" } else { "Edit Visibility" };
                    if header_button(ui, &tc, edit_label, editing) {
                        clicked_edit = true;
                    }
                    if header_button(ui, &tc, "Recollect", false) {
                        clicked_recollect = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        match &self.status {
                            Some((msg, tone)) => {
                                ui.label(
                                    egui::RichText::new(msg).color(tone.color(&tc)).size(13.0),
                                );
                            }
                            None => {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} entries",
                                        self.left.len() + self.right.len()
                                    ))
                                    .color(tc.teal)
                                    .size(13.0),
                                );
                            }
                        }
                    });
                });
            });

        // ── Panels ──
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(tc.bg_deep)
                    .inner_margin(egui::Margin::same(10.0)),
            )
            .show(ctx, |ui| {
                if let Some(texture) = &self.icon_texture {
                    ui.horizontal(|ui| {
                        ui.add(egui::Image::new(texture).max_height(48.0).rounding(4.0));
                    });
                    ui.add_space(6.0);
                }

                ui.columns(2, |cols| {
                    // Hardware panel
                    {
                        let ui = &mut cols[0];
                        ui.label(
                            egui::RichText::new(format!("Hardware ({})", self.left.len()))
                                .size(15.0)
                                .color(tc.cyan)
                                .strong(),
                        );
                        ui.add_space(4.0);
                        egui::Frame::none()
                            .fill(tc.bg_surface)
                            .rounding(6.0)
                            .stroke(egui::Stroke::new(1.0, tc.border))
                            .inner_margin(egui::Margin::same(6.0))
                            .show(ui, |ui: &mut egui::Ui| {
                                ui.set_width(ui.available_width());
                                let remaining = ui.available_height().max(60.0);
                                egui::ScrollArea::vertical()
                                    .id_salt("hardware_entries")
                                    .max_height(remaining)
                                    .show(ui, |ui| {
                                        ui.spacing_mut().item_spacing.y = 2.0;
                                        draw_entry_cards(
                                            ui,
                                            &tc,
                                            &self.left,
                                            &self.report,
                                            PanelSide::Left,
                                            &mut pending,
                                        );
                                    });
                            });
                    }

                    // System panel, with the note form underneath
                    {
                        let ui = &mut cols[1];
                        ui.label(
                            egui::RichText::new(format!("System ({})", self.right.len()))
                                .size(15.0)
                                .color(tc.cyan)
                                .strong(),
                        );
                        ui.add_space(4.0);
                        let form_height = 118.0;
                        egui::Frame::none()
                            .fill(tc.bg_surface)
                            .rounding(6.0)
                            .stroke(egui::Stroke::new(1.0, tc.border))
                            .inner_margin(egui::Margin::same(6.0))
                            .show(ui, |ui: &mut egui::Ui| {
                                ui.set_width(ui.available_width());
                                let remaining =
                                    (ui.available_height() - form_height).max(60.0);
                                egui::ScrollArea::vertical()
                                    .id_salt("system_entries")
                                    .max_height(remaining)
                                    .show(ui, |ui| {
                                        ui.spacing_mut().item_spacing.y = 2.0;
                                        draw_entry_cards(
                                            ui,
                                            &tc,
                                            &self.right,
                                            &self.report,
                                            PanelSide::Right,
                                            &mut pending,
                                        );
                                    });
                            });

                        ui.add_space(6.0);
                        egui::Frame::none()
                            .fill(tc.bg_surface)
                            .rounding(6.0)
                            .stroke(egui::Stroke::new(1.0, tc.border))
                            .inner_margin(egui::Margin::same(8.0))
                            .show(ui, |ui: &mut egui::Ui| {
                                ui.set_width(ui.available_width());
                                ui.label(
                                    egui::RichText::new("Add a note")
                                        .size(12.0)
                                        .color(tc.text_sec),
                                );
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.note_title)
                                        .hint_text("Title")
                                        .desired_width(f32::INFINITY),
                                );
                                ui.add(
                                    egui::TextEdit::multiline(&mut self.note_content)
                                        .hint_text("Details")
                                        .desired_rows(2)
                                        .desired_width(f32::INFINITY),
                                );
                                ui.add_space(4.0);
                                let btn = egui::Button::new(
                                    egui::RichText::new("Add Note").size(11.0).color(tc.teal),
                                )
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::new(1.0, tc.teal))
                                .rounding(4.0);
                                if ui.add(btn).clicked() {
                                    add_note = true;
                                }
                            });
                    }
                });
            });

        // ── Apply deferred mutations ──
        if let Some(action) = pending {
            match action {
                PendingAction::MoveUp(side, i) => self.list_mut(side).move_up(i),
                PendingAction::MoveDown(side, i) => self.list_mut(side).move_down(i),
                PendingAction::SetVisible(side, i, v) => self.list_mut(side).set_visible(i, v),
            }
        }
        if clicked_edit {
            let editing = !self.left.edit_mode;
            self.left.edit_mode = editing;
            self.right.edit_mode = editing;
        }
        if add_note {
            self.add_note();
        }
        if clicked_recollect {
            self.recollect();
        }
        if clicked_icon {
            self.pick_icon(ctx);
        }
        if clicked_save {
            self.save();
        }
    }
}

fn header_button(ui: &mut egui::Ui, tc: &ThemeColors, label: &str, active: bool) -> bool {
    let color = if active { tc.accent } else { tc.text_sec };
    let btn = egui::Button::new(egui::RichText::new(label).size(11.0).color(color))
        .fill(if active {
            blend(tc.bg_elevated, tc.accent, 0.12)
        } else {
            egui::Color32::TRANSPARENT
        })
        .stroke(if active {
            egui::Stroke::new(1.0, tc.accent)
        } else {
            egui::Stroke::new(0.5, tc.border)
        })
        .rounding(3.0);
    ui.add(btn).clicked()
}

fn draw_entry_cards(
    ui: &mut egui::Ui,
    tc: &ThemeColors,
    list: &EntryList,
    report: &SystemReport,
    side: PanelSide,
    pending: &mut Option<PendingAction>,
) {
    if list.is_empty() {
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("No entries to show")
                    .color(tc.text_sec)
                    .italics()
                    .size(13.0),
            );
        });
        return;
    }

    let editing = list.edit_mode;
    for (i, entry) in list.entries().iter().enumerate() {
        if !entry.visible && !editing {
            continue;
        }

        let base_fill = theme::parse_hex(&entry.color).unwrap_or(tc.bg_elevated);
        let card_fill = if entry.visible {
            base_fill
        } else {
            blend(base_fill, tc.bg_deep, 0.5)
        };
        let title_color = if entry.visible { tc.accent } else { tc.text_muted };

        egui::Frame::none()
            .fill(card_fill)
            .rounding(4.0)
            .stroke(egui::Stroke::new(0.5, tc.border))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui: &mut egui::Ui| {
                ui.set_width(ui.available_width());
                let rect = ui.max_rect();

                ui.painter().rect_filled(
                    egui::Rect::from_min_size(
                        rect.left_top(),
                        egui::Vec2::new(3.0, rect.height()),
                    ),
                    egui::Rounding {
                        nw: 4.0,
                        sw: 4.0,
                        ne: 0.0,
                        se: 0.0,
                    },
                    title_color,
                );

                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(entry.title())
                                .size(13.0)
                                .color(title_color)
                                .strong(),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(entry.content(report))
                                    .size(12.0)
                                    .color(tc.text),
                            )
                            .truncate(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("\u{25BC}").clicked() {
                            *pending = Some(PendingAction::MoveDown(side, i));
                        }
                        if ui.small_button("\u{25B2}").clicked() {
                            *pending = Some(PendingAction::MoveUp(side, i));
                        }
                        if editing {
                            let toggle_label = if entry.visible { "Hide" } else { "Show" };
                            if ui.small_button(toggle_label).clicked() {
                                *pending =
                                    Some(PendingAction::SetVisible(side, i, !entry.visible));
                            }
                        }
                    });
                });
            });
        ui.add_space(2.0);
    }
}

fn load_icon_texture(ctx: &egui::Context, icon: &str) -> Option<egui::TextureHandle> {
    let bytes = if icon == DEFAULT_ICON {
        DEFAULT_ICON_BYTES.to_vec()
    } else {
        std::fs::read(icon).ok()?
    };
    let img = image::load_from_memory(&bytes).ok()?.into_rgba8();
    let (w, h) = img.dimensions();
    let color_image =
        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &img.into_raw());
    Some(ctx.load_texture("sheet-icon", color_image, egui::TextureOptions::default()))
}
