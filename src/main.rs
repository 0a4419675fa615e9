use iced::widget::{button, column, container, pick_list, row, slider, text, Column};
use iced::{Alignment, Element, Length, Size, Task, Theme};

mod codec;
mod config;
mod platform;
mod state;
mod ui;

use codec::OutputFormat;
use config::{APP_NAME, DEFAULT_LOG_FILTER, MAX_QUALITY, MIN_QUALITY, WINDOW_HEIGHT, WINDOW_WIDTH};
use platform::Platform;
use state::session::Session;
use ui::dialogs::NativeDialogs;

/// Main application state
struct QuickPress {
    /// Selection, preview and output settings
    session: Session,
    /// Formats offered by the selector on this platform
    formats: Vec<OutputFormat>,
    dialogs: NativeDialogs,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Select Image"
    SelectImage,
    /// User picked an output format
    FormatSelected(OutputFormat),
    /// User moved the quality slider
    QualityChanged(u8),
    /// User clicked "Compress & Save"
    CompressAndSave,
}

impl QuickPress {
    /// Create a new instance of the application
    fn new(platform: Platform) -> (Self, Task<Message>) {
        let session = Session::new(platform);
        let formats = session.platform().output_formats();
        log::info!("🎨 {} ready, {} output formats available", APP_NAME, formats.len());

        (
            QuickPress {
                session,
                formats,
                dialogs: NativeDialogs,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state.
    /// Dialogs are modal and compression runs inline, so each message is
    /// fully handled before the next one is dispatched.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectImage => {
                self.session.select_image(&self.dialogs);
                if let Some(path) = self.session.selected() {
                    log::debug!("Current selection: {}", path.display());
                }
            }
            Message::FormatSelected(format) => {
                self.session.set_format(format);
            }
            Message::QualityChanged(quality) => {
                self.session.set_quality(quality);
            }
            Message::CompressAndSave => {
                let outcome = self.session.compress_and_save(&self.dialogs);
                log::debug!("Save finished: {:?}", outcome);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let output = self.session.config();

        let format_row = row![
            text("Output format:"),
            pick_list(self.formats.as_slice(), Some(output.format), Message::FormatSelected),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let quality_row = row![
            text("Compression Quality:"),
            slider(MIN_QUALITY..=MAX_QUALITY, output.quality, Message::QualityChanged)
                .width(Length::Fixed(160.0)),
            text(output.quality.to_string()).width(Length::Fixed(30.0)),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            text(APP_NAME).size(24),
            ui::preview::preview_panel(self.session.preview()),
            button("Select Image")
                .on_press(Message::SelectImage)
                .padding(8),
            format_row,
            quality_row,
            button("Compress & Save")
                .on_press(Message::CompressAndSave)
                .padding(10),
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let platform = Platform::detect();
    platform.apply_display_name(APP_NAME);

    iced::application(APP_NAME, QuickPress::update, QuickPress::view)
        .theme(QuickPress::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || QuickPress::new(platform))
}
