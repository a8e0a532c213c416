use iced::widget::{
    button, column, container, horizontal_space, opaque, row, scrollable, stack, text,
    text_editor, text_input, Column, Row,
};
use iced::{window, Background, Border, Element, Length};

use gridnote_engine::grid::{CellPos, GRID_SIZE};

use crate::app::{modal_input_id, App, Message, Modal};
use crate::highlighter::{to_format, TagHighlighter};

const BUTTON_TEXT_SIZE: f32 = 14.0;

fn panel_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(BUTTON_TEXT_SIZE))
        .on_press(message)
        .width(Length::Fill)
        .into()
}

fn modal_input(value: &str) -> Element<'_, Message> {
    text_input("", value)
        .id(modal_input_id())
        .on_input(Message::ModalInput)
        .on_submit(Message::ModalSubmit)
        .size(16.0)
        .padding(8)
        .into()
}

fn ok_cancel<'a>() -> Element<'a, Message> {
    row![
        button(text("OK")).on_press(Message::ModalSubmit),
        button(text("Cancel")).on_press(Message::ModalCancel),
    ]
    .spacing(8)
    .into()
}

impl App {
    pub fn view(&self, window: window::Id) -> Element<'_, Message> {
        if window == self.main_window {
            self.view_main()
        } else if self.template.as_ref().is_some_and(|t| t.id == window) {
            self.view_template()
        } else {
            horizontal_space().into()
        }
    }

    fn view_main(&self) -> Element<'_, Message> {
        let theme = self.colors();

        let grid = (0..GRID_SIZE).fold(Column::new().spacing(4), |grid, r| {
            let cells = (0..GRID_SIZE)
                .filter_map(|c| CellPos::new(r, c))
                .fold(Row::new().spacing(4).height(Length::Fill), |cells, pos| {
                    cells.push(self.view_cell(pos))
                });
            grid.push(cells)
        });

        let status = container(
            text(self.status_message.as_deref().unwrap_or(""))
                .size(12.0)
                .color(theme.text_dim),
        )
        .padding(6)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(theme.bg_panel)),
            ..Default::default()
        });

        let content = column![container(grid).padding(4).height(Length::Fill), status];

        match &self.modal {
            Some(modal) => self.with_modal(content.into(), self.view_modal(modal)),
            None => content.into(),
        }
    }

    fn view_cell(&self, pos: CellPos) -> Element<'_, Message> {
        let theme = self.colors();

        let body: Element<'_, Message> = if pos.is_control() {
            self.view_control_panel()
        } else {
            match self.cells.get(&pos) {
                Some(content) => column![
                    text(pos.to_string()).size(12.0).color(theme.text_dim),
                    text_editor(content)
                        .on_action(move |action| Message::CellEdited(pos, action))
                        .size(f32::from(self.state.font_size.get()))
                        .height(Length::Fill)
                        .highlight_with::<TagHighlighter>(self.state.highlight.targets(), to_format),
                ]
                .spacing(2)
                .into(),
                None => horizontal_space().into(),
            }
        };

        container(body)
            .padding(4)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(theme.bg_cell)),
                border: Border {
                    color: theme.border,
                    width: 1.0,
                    radius: 2.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_control_panel(&self) -> Element<'_, Message> {
        scrollable(
            column![
                panel_button("Import JSON", Message::ImportJson),
                panel_button("Export JSON", Message::ExportJson),
                panel_button("Export CSV", Message::ExportCsv),
                panel_button(self.spelling_toggle_label(), Message::ToggleSpelling),
                panel_button(self.word_toggle_label(), Message::ToggleWordHighlight),
                panel_button("Spell Check with Suggestions", Message::SpellSuggest),
                panel_button("Increase Font Size", Message::IncreaseFont),
                panel_button("Decrease Font Size", Message::DecreaseFont),
                panel_button("Open Template Maker", Message::OpenTemplateMaker),
            ]
            .spacing(4),
        )
        .height(Length::Fill)
        .into()
    }

    /// Lay `dialog` over `base`, blocking input to everything underneath.
    fn with_modal<'a>(
        &self,
        base: Element<'a, Message>,
        dialog: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let theme = self.colors();
        stack![
            base,
            opaque(
                container(
                    container(dialog)
                        .width(420)
                        .padding(12)
                        .style(move |_| container::Style {
                            background: Some(Background::Color(theme.bg_panel)),
                            border: Border {
                                color: theme.border,
                                width: 1.0,
                                radius: 6.0.into(),
                            },
                            ..Default::default()
                        })
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(iced::Padding { top: 50.0, right: 0.0, bottom: 0.0, left: 0.0 })
                .center_x(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(theme.backdrop)),
                    ..Default::default()
                })
            )
        ]
        .into()
    }

    fn view_modal<'a>(&self, modal: &'a Modal) -> Element<'a, Message> {
        let theme = self.colors();

        match modal {
            Modal::HighlightWord { input: value } => column![
                text("Highlight Word").size(16.0).color(theme.text),
                text("Enter the word to highlight:").size(14.0).color(theme.text),
                modal_input(value),
                ok_cancel(),
            ]
            .spacing(8)
            .into(),

            Modal::Suggestion { prompt, input: value } => {
                let listed = if prompt.candidates.is_empty() {
                    "none".to_string()
                } else {
                    prompt.candidates.join(", ")
                };
                let picks = prompt.candidates.iter().take(5).fold(
                    Row::new().spacing(4),
                    |picks, candidate| {
                        picks.push(
                            button(text(candidate.as_str()).size(12.0))
                                .on_press(Message::ModalInput(candidate.clone())),
                        )
                    },
                );
                column![
                    text("Spelling Suggestions").size(16.0).color(theme.text),
                    text(format!("{}: suggestions for '{}': {}", prompt.pos, prompt.word, listed))
                        .size(14.0)
                        .color(theme.text),
                    picks,
                    text("Enter correction:").size(14.0).color(theme.text),
                    modal_input(value),
                    ok_cancel(),
                ]
                .spacing(8)
                .into()
            }

            Modal::ApplyToAll { word, correction } => column![
                text("Apply to All").size(16.0).color(theme.text),
                text(format!(
                    "Apply correction '{correction}' to all occurrences of '{word}'?"
                ))
                .size(14.0)
                .color(theme.text),
                row![
                    button(text("Yes")).on_press(Message::ApplyToAll(true)),
                    button(text("No")).on_press(Message::ApplyToAll(false)),
                ]
                .spacing(8),
            ]
            .spacing(8)
            .into(),
        }
    }

    fn view_template(&self) -> Element<'_, Message> {
        let Some(maker) = &self.template else {
            return horizontal_space().into();
        };
        let font_size = f32::from(self.state.font_size.get());

        column![
            text("This is the Template Maker Window.").size(font_size),
            text_editor(&maker.content)
                .on_action(Message::TemplateEdited)
                .size(font_size)
                .height(Length::Fill),
            row![
                panel_button("Save Template", Message::TemplateSave),
                panel_button("Load Template", Message::TemplateLoad),
                panel_button("Send to Cell Next to Menu", Message::TemplateSend),
            ]
            .spacing(4),
        ]
        .spacing(8)
        .padding(8)
        .into()
    }
}
