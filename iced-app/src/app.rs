use std::collections::BTreeMap;
use std::path::PathBuf;

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{text_editor, text_input};
use iced::{window, Size, Subscription, Task, Theme};

use gridnote_config::settings::Settings;
use gridnote_engine::grid::{CellPos, Grid};
use gridnote_engine::highlight::WordToggle;
use gridnote_engine::state::AppState;
use gridnote_engine::suggest::{PassStep, SuggestionPrompt};
use gridnote_engine::template::{self, TEMPLATE_TARGET};
use gridnote_io::csv::{self as grid_csv, HeaderTemplate};
use gridnote_io::json;
use gridnote_io::template as template_file;

use crate::theme::{iced_theme, ThemeColors};

pub(crate) fn modal_input_id() -> text_input::Id {
    text_input::Id::new("modal_input")
}

/// In-window prompt that captures input until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    HighlightWord { input: String },
    Suggestion { prompt: SuggestionPrompt, input: String },
    ApplyToAll { word: String, correction: String },
}

pub struct TemplateWindow {
    pub id: window::Id,
    pub content: text_editor::Content,
}

pub struct App {
    pub(crate) state: AppState,
    pub(crate) settings: Settings,
    pub(crate) main_window: window::Id,
    pub(crate) cells: BTreeMap<CellPos, text_editor::Content>,
    pub(crate) template: Option<TemplateWindow>,
    pub(crate) modal: Option<Modal>,
    pub(crate) status_message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Windows
    WindowOpened(window::Id),
    WindowClosed(window::Id),

    // Grid
    CellEdited(CellPos, text_editor::Action),

    // Files
    ImportJson,
    ImportPicked(Option<PathBuf>),
    Imported(Result<serde_json::Value, String>),
    ExportJson,
    ExportJsonPicked(Option<PathBuf>),
    ExportCsv,
    ExportCsvPicked(Option<PathBuf>),
    FileWritten(Result<PathBuf, String>),

    // Highlighting and spelling
    ToggleSpelling,
    ToggleWordHighlight,
    SpellSuggest,

    // Font
    IncreaseFont,
    DecreaseFont,

    // Template Maker
    OpenTemplateMaker,
    TemplateEdited(text_editor::Action),
    TemplateSave,
    TemplateSavePicked(Option<PathBuf>),
    TemplateLoad,
    TemplateLoadPicked(Option<PathBuf>),
    TemplateLoaded(Result<Option<String>, String>),
    TemplateSend,

    // Modal prompts
    ModalInput(String),
    ModalSubmit,
    ModalCancel,
    ApplyToAll(bool),
}

/// Editor text without the trailing newline `Content::text` appends.
pub(crate) fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let (id, open) = window::open(window::Settings {
            size: Size::new(960.0, 720.0),
            ..window::Settings::default()
        });
        (Self::with_settings(settings, id), open.map(Message::WindowOpened))
    }

    pub(crate) fn with_settings(settings: Settings, main_window: window::Id) -> Self {
        let state = AppState::new(settings.font_size(), settings.spell_checker());
        let cells = Grid::data_positions()
            .map(|pos| (pos, text_editor::Content::new()))
            .collect();
        log::debug!(
            "starting with font size {} and {:?} cell keys",
            state.font_size.get(),
            settings.cell_keys
        );
        Self {
            state,
            settings,
            main_window,
            cells,
            template: None,
            modal: None,
            status_message: None,
        }
    }

    pub fn title(&self, window: window::Id) -> String {
        if self.template.as_ref().is_some_and(|t| t.id == window) {
            "Template Maker".to_string()
        } else {
            "gridnote".to_string()
        }
    }

    pub fn theme(&self, _window: window::Id) -> Theme {
        iced_theme(self.settings.dark_mode)
    }

    pub(crate) fn colors(&self) -> ThemeColors {
        ThemeColors::for_mode(self.settings.dark_mode)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_events().map(Message::WindowClosed),
            keyboard::on_key_press(|key, _modifiers| match key {
                Key::Named(Named::Escape) => Some(Message::ModalCancel),
                _ => None,
            }),
        ])
    }

    pub(crate) fn spelling_toggle_label(&self) -> &'static str {
        if self.state.highlight.spelling_active() {
            "Stop Highlighting Spelling Errors"
        } else {
            "Highlight Spelling Errors"
        }
    }

    pub(crate) fn word_toggle_label(&self) -> &'static str {
        if self.state.highlight.word_active() {
            "Stop Highlighting Specific Word"
        } else {
            "Highlight Specific Word"
        }
    }

    /// Rebuild editors whose text no longer matches the grid.
    fn sync_editors(&mut self) {
        for (pos, content) in self.cells.iter_mut() {
            let text = self.state.grid.get(*pos);
            if editor_text(content) != text {
                *content = text_editor::Content::with_text(text);
            }
        }
    }

    fn report_error(&mut self, context: &str, error: String) {
        log::warn!("{context}: {error}");
        self.status_message = Some(format!("{context}: {error}"));
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                log::debug!("window {id:?} opened");
                Task::none()
            }

            Message::WindowClosed(id) => {
                if id == self.main_window {
                    return iced::exit();
                }
                if self.template.as_ref().is_some_and(|t| t.id == id) {
                    self.template = None;
                }
                Task::none()
            }

            Message::CellEdited(pos, action) => {
                if let Some(content) = self.cells.get_mut(&pos) {
                    let is_edit = action.is_edit();
                    content.perform(action);
                    if is_edit {
                        self.state.grid.set(pos, editor_text(content));
                    }
                }
                Task::none()
            }

            Message::ImportJson => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("JSON files", &["json"])
                        .add_filter("All files", &["*"])
                        .set_title("Import JSON")
                        .pick_file()
                        .await
                        .map(|h| h.path().to_path_buf())
                },
                Message::ImportPicked,
            ),

            Message::ImportPicked(path) => {
                let Some(path) = path else {
                    return Task::none();
                };
                log::info!("importing grid from {}", path.display());
                Task::perform(async move { json::read_document(&path) }, Message::Imported)
            }

            Message::Imported(result) => {
                let applied = result.and_then(|doc| {
                    json::apply_document(&mut self.state.grid, self.settings.cell_keys, &doc)
                });
                match applied {
                    Ok(report) => {
                        self.sync_editors();
                        self.status_message = Some(if report.skipped.is_empty() {
                            format!("Imported {} cells", report.applied)
                        } else {
                            format!(
                                "Imported {} cells, skipped {}",
                                report.applied,
                                report.skipped.len()
                            )
                        });
                    }
                    Err(e) => self.report_error("Error importing", e),
                }
                Task::none()
            }

            Message::ExportJson => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("JSON files", &["json"])
                        .set_title("Export JSON")
                        .set_file_name("grid.json")
                        .save_file()
                        .await
                        .map(|h| h.path().to_path_buf())
                },
                Message::ExportJsonPicked,
            ),

            Message::ExportJsonPicked(path) => {
                let Some(path) = path else {
                    return Task::none();
                };
                let grid = self.state.grid.clone();
                let encoding = self.settings.cell_keys;
                Task::perform(
                    async move { json::export(&grid, encoding, &path).map(|()| path) },
                    Message::FileWritten,
                )
            }

            Message::ExportCsv => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("CSV files", &["csv"])
                        .set_title("Export CSV")
                        .set_file_name("grid.csv")
                        .save_file()
                        .await
                        .map(|h| h.path().to_path_buf())
                },
                Message::ExportCsvPicked,
            ),

            Message::ExportCsvPicked(path) => {
                let Some(path) = path else {
                    return Task::none();
                };
                let grid = self.state.grid.clone();
                let header = HeaderTemplate::new(self.settings.csv_header.clone());
                Task::perform(
                    async move { grid_csv::export(&grid, &header, &path).map(|()| path) },
                    Message::FileWritten,
                )
            }

            Message::FileWritten(result) => {
                match result {
                    Ok(path) => self.status_message = Some(format!("Saved: {}", path.display())),
                    Err(e) => self.report_error("Error saving", e),
                }
                Task::none()
            }

            Message::ToggleSpelling => {
                let on = self.state.toggle_spelling();
                self.status_message = Some(if on {
                    let count = self.state.highlight.misspelled().count();
                    format!("Highlighting {count} misspelled word(s)")
                } else {
                    "Spelling highlight off".to_string()
                });
                Task::none()
            }

            Message::ToggleWordHighlight => match self.state.highlight.toggle_word() {
                WordToggle::AskForWord => {
                    self.modal = Some(Modal::HighlightWord { input: String::new() });
                    text_input::focus(modal_input_id())
                }
                WordToggle::Cleared => {
                    if matches!(self.modal, Some(Modal::HighlightWord { .. })) {
                        self.modal = None;
                    }
                    Task::none()
                }
            },

            Message::SpellSuggest => {
                if self.modal.is_some() {
                    return Task::none();
                }
                let step = self.state.start_suggestions();
                self.show_step(step)
            }

            Message::IncreaseFont => {
                self.state.font_size.increase();
                Task::none()
            }

            Message::DecreaseFont => {
                self.state.font_size.decrease();
                Task::none()
            }

            Message::OpenTemplateMaker => {
                if let Some(existing) = &self.template {
                    return window::gain_focus(existing.id);
                }
                let (id, open) = window::open(window::Settings {
                    size: Size::new(520.0, 420.0),
                    ..window::Settings::default()
                });
                self.template = Some(TemplateWindow {
                    id,
                    content: text_editor::Content::new(),
                });
                open.map(Message::WindowOpened)
            }

            Message::TemplateEdited(action) => {
                if let Some(maker) = self.template.as_mut() {
                    maker.content.perform(action);
                }
                Task::none()
            }

            Message::TemplateSave => {
                let Some(maker) = &self.template else {
                    return Task::none();
                };
                if editor_text(&maker.content).trim().is_empty() {
                    self.status_message = Some("Template is empty, nothing to save".to_string());
                    return Task::none();
                }
                Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .add_filter("JSON files", &["json"])
                            .set_title("Save Template")
                            .set_file_name("template.json")
                            .save_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    Message::TemplateSavePicked,
                )
            }

            Message::TemplateSavePicked(path) => {
                let (Some(path), Some(maker)) = (path, &self.template) else {
                    return Task::none();
                };
                let text = editor_text(&maker.content);
                Task::perform(
                    async move { template_file::save(&path, &text).map(|()| path) },
                    Message::FileWritten,
                )
            }

            Message::TemplateLoad => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("JSON files", &["json"])
                        .add_filter("All files", &["*"])
                        .set_title("Load Template")
                        .pick_file()
                        .await
                        .map(|h| h.path().to_path_buf())
                },
                Message::TemplateLoadPicked,
            ),

            Message::TemplateLoadPicked(path) => match path {
                Some(path) => Task::perform(
                    async move { template_file::load(&path) },
                    Message::TemplateLoaded,
                ),
                None => Task::none(),
            },

            Message::TemplateLoaded(result) => {
                match result {
                    Ok(Some(text)) => {
                        if let Some(maker) = self.template.as_mut() {
                            maker.content = text_editor::Content::with_text(&text);
                            self.status_message = Some("Template loaded".to_string());
                        }
                    }
                    Ok(None) => {
                        self.status_message = Some("No template found in file".to_string());
                    }
                    Err(e) => self.report_error("Error loading template", e),
                }
                Task::none()
            }

            Message::TemplateSend => {
                let Some(maker) = &self.template else {
                    return Task::none();
                };
                let text = editor_text(&maker.content);
                if template::send(&mut self.state.grid, &text) {
                    self.sync_editors();
                    self.status_message = Some(format!("Sent template to {TEMPLATE_TARGET}"));
                } else {
                    self.status_message = Some("Template is empty, nothing sent".to_string());
                }
                Task::none()
            }

            Message::ModalInput(value) => {
                match self.modal.as_mut() {
                    Some(Modal::HighlightWord { input }) | Some(Modal::Suggestion { input, .. }) => {
                        *input = value;
                    }
                    _ => {}
                }
                Task::none()
            }

            Message::ModalSubmit => match self.modal.take() {
                Some(Modal::HighlightWord { input }) => {
                    self.state.highlight.set_word(Some(input));
                    Task::none()
                }
                Some(Modal::Suggestion { input, .. }) => {
                    match self.state.answer_suggestion(Some(input)) {
                        Some(step) => self.show_step(step),
                        None => Task::none(),
                    }
                }
                other => {
                    self.modal = other;
                    Task::none()
                }
            },

            Message::ModalCancel => match self.modal.take() {
                Some(Modal::HighlightWord { .. }) => {
                    self.state.highlight.set_word(None);
                    Task::none()
                }
                Some(Modal::Suggestion { .. }) => match self.state.answer_suggestion(None) {
                    Some(step) => self.show_step(step),
                    None => Task::none(),
                },
                Some(Modal::ApplyToAll { .. }) => self.update(Message::ApplyToAll(false)),
                None => Task::none(),
            },

            Message::ApplyToAll(apply) => {
                self.modal = None;
                match self.state.confirm_suggestion(apply) {
                    Some(step) => self.show_step(step),
                    None => Task::none(),
                }
            }
        }
    }

    /// Present the next step of a suggestion pass.
    fn show_step(&mut self, step: PassStep) -> Task<Message> {
        self.sync_editors();
        match step {
            PassStep::Prompt(prompt) => {
                let input = prompt.best.clone().unwrap_or_default();
                self.modal = Some(Modal::Suggestion { prompt, input });
                text_input::focus(modal_input_id())
            }
            PassStep::Confirm { word, correction } => {
                self.modal = Some(Modal::ApplyToAll { word, correction });
                Task::none()
            }
            PassStep::Done(summary) => {
                self.modal = None;
                self.status_message = Some(format!(
                    "Spell check done: {} corrected, {} applied automatically, {} skipped",
                    summary.replaced, summary.auto_replaced, summary.skipped
                ));
                Task::none()
            }
        }
    }
}
