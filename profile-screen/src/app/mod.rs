use iced::{Element, Task, Theme};

use crate::domains::profile::commands::{self, CommandContext};
use crate::domains::profile::update::{self, ProfileUpdateResult};
use crate::domains::profile::{ProfileMessage, ProfileScreenState};
use crate::views::{self, theme::ProfileTheme};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// The running screen: its state and what commands execute against.
#[derive(Debug)]
pub struct ProfileApp {
    pub screen: ProfileScreenState,
    context: CommandContext,
}

impl ProfileApp {
    pub fn boot(context: CommandContext) -> (Self, Task<ProfileMessage>) {
        let (screen, result) = update::boot();
        let app = Self { screen, context };
        let task = app.run(result);
        (app, task)
    }

    pub fn update(&mut self, message: ProfileMessage) -> Task<ProfileMessage> {
        let result = update::handle_message(&mut self.screen, message);
        self.run(result)
    }

    pub fn view(&self) -> Element<'_, ProfileMessage> {
        views::view_profile(&self.screen)
    }

    fn run(&self, result: ProfileUpdateResult) -> Task<ProfileMessage> {
        Task::batch(
            result.commands.into_iter().map(|command| {
                commands::into_task(command, self.context.clone())
            }),
        )
    }
}

fn app_theme(_: &ProfileApp) -> Theme {
    ProfileTheme::theme()
}

/// Build and run the profile window.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let context = config.build_context()?;

    iced::application(
        move || ProfileApp::boot(context.clone()),
        ProfileApp::update,
        ProfileApp::view,
    )
    .title("My Profile")
    .theme(app_theme)
    .window_size((720.0, 900.0))
    .run()
    .map_err(|err| anyhow::anyhow!("profile window failed: {err}"))
}
