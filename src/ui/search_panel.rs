//! The autocomplete panel: a text input plus a results list that is
//! open while the query is non-empty. Returns the confirmed class name
//! to the caller; navigation itself is the app's business.

use egui;

pub const NO_RESULTS_LABEL: &str = "Nenhuma turma encontrada";

pub struct SearchPanel {
    query: String,
    open: bool,
    /// Indices into the class list, recomputed every frame while open.
    matches: Vec<usize>,
    /// Keyboard-highlighted row, as an index into `matches`.
    active: Option<usize>,
    first_frame: bool,
    scroll_to_active: bool,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            open: false,
            matches: Vec::new(),
            active: None,
            first_frame: true,
            scroll_to_active: false,
        }
    }

    /// Render the panel. Returns the class name when a row is confirmed
    /// by Enter or click.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        classes: &[String],
        loaded: bool,
    ) -> Option<String> {
        let mut confirmed: Option<String> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Busca de Turmas");
            ui.add_space(6.0);

            let input = ui.add(
                egui::TextEdit::singleline(&mut self.query)
                    .hint_text("Digite o nome da turma")
                    .desired_width(f32::INFINITY),
            );

            if self.first_frame {
                input.request_focus();
                self.first_frame = false;
            }
            if input.changed() {
                self.on_query_changed();
            }
            if input.gained_focus() && !self.query.trim().is_empty() {
                self.open = true;
            }

            if !loaded {
                ui.add_space(4.0);
                ui.weak("Carregando turmas...");
            }

            self.matches = if self.open {
                filter_classes(classes, &self.query)
            } else {
                Vec::new()
            };
            if matches!(self.active, Some(row) if row >= self.matches.len()) {
                self.active = None;
            }

            if self.open {
                ui.add_space(6.0);
                ui.separator();

                let results = ui.scope(|ui| {
                    if self.matches.is_empty() {
                        // Placeholder row: not selectable, not clickable.
                        ui.weak(NO_RESULTS_LABEL);
                    } else {
                        egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                            for (row, &class_idx) in self.matches.iter().enumerate() {
                                let is_active = self.active == Some(row);
                                let label = ui.selectable_label(is_active, &classes[class_idx]);
                                if label.clicked() {
                                    confirmed = Some(classes[class_idx].clone());
                                }
                                if is_active && self.scroll_to_active {
                                    label.scroll_to_me(Some(egui::Align::Center));
                                }
                            }
                        });
                        self.scroll_to_active = false;
                    }
                });

                // A press outside both the input and the results area
                // dismisses the panel.
                let press_pos = ctx.input(|i| {
                    if i.pointer.any_pressed() {
                        i.pointer.interact_pos()
                    } else {
                        None
                    }
                });
                if let Some(pos) = press_pos {
                    if press_dismisses(pos, input.rect, results.response.rect)
                        && confirmed.is_none()
                    {
                        self.close();
                    }
                }
            }

            let (down, up, enter, escape) = ctx.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowDown),
                    i.key_pressed(egui::Key::ArrowUp),
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Escape),
                )
            });

            if self.open {
                if down {
                    self.active = step_down(self.active, self.matches.len());
                    self.scroll_to_active = true;
                }
                if up {
                    self.active = step_up(self.active, self.matches.len());
                    self.scroll_to_active = true;
                }
                if enter && confirmed.is_none() {
                    if let Some(row) = confirm_index(self.active, self.matches.len()) {
                        confirmed = Some(classes[self.matches[row]].clone());
                    }
                }
            }
            if escape {
                self.close();
                input.surrender_focus();
            }
        });

        if let Some(name) = &confirmed {
            self.query = name.clone();
            self.close();
        }
        confirmed
    }

    fn on_query_changed(&mut self) {
        self.active = None;
        self.open = !self.query.trim().is_empty();
    }

    fn close(&mut self) {
        self.open = false;
        self.active = None;
    }
}

/// Indices of the classes whose lowercase form contains the trimmed
/// lowercase query as a substring, in list order. No ranking.
pub fn filter_classes(classes: &[String], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    classes
        .iter()
        .enumerate()
        .filter(|(_, name)| name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Next highlighted row moving down, wrapping at the end; seeds at the
/// first row when nothing is highlighted yet.
fn step_down(active: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match active {
        None => 0,
        Some(row) => (row + 1) % len,
    })
}

/// Next highlighted row moving up, wrapping at the start; seeds at the
/// last row when nothing is highlighted yet.
fn step_up(active: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match active {
        None => len - 1,
        Some(row) => (row + len - 1) % len,
    })
}

/// Whether a pointer press at `pos` lands outside both the input and
/// the results area.
fn press_dismisses(pos: egui::Pos2, input_rect: egui::Rect, results_rect: egui::Rect) -> bool {
    !input_rect.contains(pos) && !results_rect.contains(pos)
}

/// Row confirmed by Enter: the highlight if any, else the first row,
/// else nothing.
fn confirm_index(active: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(active.unwrap_or(0).min(len - 1))
    }
}
