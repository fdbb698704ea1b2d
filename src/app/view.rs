use super::messages::{IntensityBound, Message};
use super::state::{
    App, GUIDE_THICKNESS_PX, INTENSITY_INPUT_WIDTH_PX, MAIN_PANE_HEIGHT_PX, PaneRender,
    SIDE_PANE_HEIGHT_PX, format_intensity,
};
use crate::manifest::SessionType;
use crate::viewer::{GuideOrientation, GuidePlacement, SliceType};
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, Space, Stack, button, column, container, horizontal_rule, pick_list, row, text,
    text_input, vertical_rule,
};
use iced::{Border, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let element_count = self.session.element_count();

        let prev_button = if self.session.element_index > 0 {
            button("Previous").on_press(Message::PreviousElement)
        } else {
            button("Previous")
        };
        let next_button = if self.session.element_index + 1 < element_count {
            button("Next").on_press(Message::NextElement)
        } else {
            button("Next")
        };

        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };

        let controls = row![
            prev_button,
            next_button,
            text(self.element_indicator()),
            Space::new(Length::Fill, Length::Shrink),
            text(format!("x{}", format_intensity(self.multiplier))),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let prompt = text(self.session.manifest.prompt.clone()).size(20);

        let panes: Element<'_, Message> =
            if self.session.manifest.session_type == SessionType::CategoricalVolume {
                self.volume_view()
            } else {
                self.pane_strip(MAIN_PANE_HEIGHT_PX)
            };

        let mut content: Column<'_, Message> = column![
            controls,
            prompt,
            self.label_controls(),
            panes,
            self.intensity_controls(),
        ]
        .padding(16)
        .spacing(12);

        if let Some(status) = &self.status {
            content = content.push(text(status.clone()).size(14));
        }

        content.into()
    }

    fn label_controls(&self) -> Element<'_, Message> {
        let buttons = self
            .labels
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let style = if self.labels.is_selected(value) {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(format!("{} [{}]", value, index + 1)))
                    .style(style)
                    .on_press(Message::LabelClicked(index))
                    .into()
            })
            .collect::<Vec<_>>();
        Row::with_children(buttons).spacing(8).into()
    }

    /// Three axis panes with their cross-hair guides, plus the large pane
    /// tracking the active axis.
    fn volume_view(&self) -> Element<'_, Message> {
        let strip = self.pane_strip(SIDE_PANE_HEIGHT_PX);

        let active = self.nav.as_ref().map(|nav| nav.active());
        let type_select = pick_list(&SliceType::ALL[..], active, Message::SelectSliceType);
        let indicator = text(self.slice_indicator().unwrap_or_default());

        let main: Element<'_, Message> = match self.main_pane() {
            Some(pane) => container(self.pane_image(&pane.url))
                .width(Length::Fill)
                .height(MAIN_PANE_HEIGHT_PX)
                .into(),
            None => Space::new(Length::Fill, Length::Shrink).into(),
        };

        column![
            strip,
            row![type_select, indicator]
                .spacing(10)
                .align_y(Vertical::Center),
            main,
        ]
        .spacing(12)
        .into()
    }

    fn pane_strip(&self, height: f32) -> Element<'_, Message> {
        let panes = self
            .side_panes()
            .into_iter()
            .map(|pane| self.side_pane_view(pane, height))
            .collect::<Vec<_>>();
        Row::with_children(panes).spacing(12).width(Length::Fill).into()
    }

    fn side_pane_view(&self, pane: PaneRender, height: f32) -> Element<'_, Message> {
        let image_view = self.pane_image(&pane.url);
        let layered: Element<'_, Message> = match pane.guide {
            Some(placement) => Stack::with_children(vec![image_view, guide_overlay(placement)])
                .width(Length::Fill)
                .height(height)
                .into(),
            None => container(image_view)
                .width(Length::Fill)
                .height(height)
                .into(),
        };

        let selected = pane.selected;
        container(
            column![text(pane.caption).size(14), layered].spacing(4),
        )
        .padding(4)
        .width(Length::FillPortion(1))
        .style(move |theme: &Theme| pane_frame(theme, selected))
        .into()
    }

    fn pane_image(&self, url: &str) -> Element<'_, Message> {
        match self.thumbs.get(url) {
            Some(handle) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(text("Loading...").size(14))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        }
    }

    fn intensity_controls(&self) -> Element<'_, Message> {
        let element = self.session.current();
        let rows = self
            .windows
            .iter()
            .enumerate()
            .map(|(slot, window)| {
                let mut controls: Row<'_, Message> = row![].spacing(8).align_y(Vertical::Center);
                if self.windows.len() > 1 {
                    controls = controls.push(text(element.images[slot].image_name.clone()).size(14));
                }
                controls
                    .push(text("Min"))
                    .push(
                        text_input("min", &window.min_input)
                            .on_input(move |value| Message::IntensityInputChanged {
                                slot,
                                bound: IntensityBound::Min,
                                value,
                            })
                            .on_submit(Message::IntensityInputSubmitted {
                                slot,
                                bound: IntensityBound::Min,
                            })
                            .width(INTENSITY_INPUT_WIDTH_PX),
                    )
                    .push(text("Max"))
                    .push(
                        text_input("max", &window.max_input)
                            .on_input(move |value| Message::IntensityInputChanged {
                                slot,
                                bound: IntensityBound::Max,
                                value,
                            })
                            .on_submit(Message::IntensityInputSubmitted {
                                slot,
                                bound: IntensityBound::Max,
                            })
                            .width(INTENSITY_INPUT_WIDTH_PX),
                    )
                    .into()
            })
            .collect::<Vec<_>>();
        Column::with_children(rows).spacing(6).into()
    }
}

/// Cross-hair bar drawn over an inactive pane, positioned by percentage.
fn guide_overlay(placement: GuidePlacement) -> Element<'static, Message> {
    let lead = placement.offset_percent.round().clamp(1.0, 99.0) as u16;
    let trail = 100 - lead;
    match placement.orientation {
        GuideOrientation::Horizontal => column![
            Space::new(Length::Fill, Length::FillPortion(lead)),
            horizontal_rule(GUIDE_THICKNESS_PX),
            Space::new(Length::Fill, Length::FillPortion(trail)),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        GuideOrientation::Vertical => row![
            Space::new(Length::FillPortion(lead), Length::Fill),
            vertical_rule(GUIDE_THICKNESS_PX),
            Space::new(Length::FillPortion(trail), Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
    }
}

/// Frame style for a pane; the active axis gets an accent border.
fn pane_frame(theme: &Theme, selected: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if selected {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };
    container::Style {
        border: Border {
            color: border_color,
            width: if selected { 2.0 } else { 1.0 },
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}
