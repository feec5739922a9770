//! Profile screen view
//!
//! Profile info (avatar + secondary fields), personal info, and the password
//! form, with the error line and success toast above them.

use iced::widget::image::Image;
use iced::widget::{
    Column, button, column, container, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};
use profile_model::{PasswordField, PersonalField, ProfileField};

use crate::domains::profile::{ProfileMessage, ProfileScreenState};
use crate::views::theme::{self, ProfileTheme};

const AVATAR_SIZE: f32 = 72.0;

pub fn view_profile(state: &ProfileScreenState) -> Element<'_, ProfileMessage> {
    let title = text("My Profile")
        .size(32)
        .color(ProfileTheme::TEXT_PRIMARY);

    let body = if state.is_loading() {
        view_loading()
    } else {
        view_form(state)
    };

    let content = column![title, body].spacing(20).padding(20).max_width(720);

    container(scrollable(container(content).center_x(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_loading<'a>() -> Element<'a, ProfileMessage> {
    text("Loading profile...")
        .size(16)
        .color(ProfileTheme::TEXT_SECONDARY)
        .into()
}

fn view_form(state: &ProfileScreenState) -> Element<'_, ProfileMessage> {
    let mut content = Column::new().spacing(20);

    if let Some(message) = state.error_message() {
        content = content.push(text(message).color(ProfileTheme::ERROR));
    }
    if let Some(toast) = &state.success {
        content = content.push(
            container(text(toast.message.as_str()))
                .padding(12)
                .style(theme::toast),
        );
    }

    content
        .push(section("Profile Info", view_profile_info(state)))
        .push(divider())
        .push(section("Personal Info", view_personal_info(state)))
        .push(divider())
        .push(section("Change Password", view_password(state)))
        .into()
}

fn view_profile_info(
    state: &ProfileScreenState,
) -> Element<'_, ProfileMessage> {
    let photo_row = row![
        view_avatar(state),
        button(text("Upload Profile Photo"))
            .on_press(ProfileMessage::PickPhoto)
            .style(button::secondary)
            .padding([10, 20]),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let fields = Column::with_children(ProfileField::ALL.into_iter().map(
        |field| {
            labeled_input(
                field.label(),
                state.profile.get(field),
                false,
                move |value| ProfileMessage::UpdateProfileField(field, value),
            )
        },
    ))
    .spacing(10);

    column![
        photo_row,
        fields,
        submit_button(
            "Save Profile Info",
            state.profile_saving,
            ProfileMessage::SubmitProfileInfo
        ),
    ]
    .spacing(15)
    .into()
}

fn view_personal_info(
    state: &ProfileScreenState,
) -> Element<'_, ProfileMessage> {
    let fields = Column::with_children(PersonalField::ALL.into_iter().map(
        |field| {
            labeled_input(
                field.label(),
                state.personal.get(field),
                false,
                move |value| ProfileMessage::UpdatePersonalField(field, value),
            )
        },
    ))
    .spacing(10);

    column![
        fields,
        submit_button(
            "Update Personal Info",
            state.personal_saving,
            ProfileMessage::SubmitPersonalInfo
        ),
    ]
    .spacing(15)
    .into()
}

fn view_password(state: &ProfileScreenState) -> Element<'_, ProfileMessage> {
    let fields = Column::with_children(PasswordField::ALL.into_iter().map(
        |field| {
            labeled_input(
                field.label(),
                state.password.get(field),
                true,
                move |value| ProfileMessage::UpdatePasswordField(field, value),
            )
        },
    ))
    .spacing(10);

    column![
        fields,
        submit_button(
            "Update Password",
            state.password_saving,
            ProfileMessage::SubmitPasswordChange
        ),
    ]
    .spacing(15)
    .into()
}

fn view_avatar(state: &ProfileScreenState) -> Element<'_, ProfileMessage> {
    match &state.photo {
        Some(preview) => Image::new(preview.handle().clone())
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .into(),
        None => container(text(state.personal.initials()).size(24))
            .center_x(Length::Fixed(AVATAR_SIZE))
            .center_y(Length::Fixed(AVATAR_SIZE))
            .style(theme::avatar)
            .into(),
    }
}

fn section<'a>(
    title: &'a str,
    body: Element<'a, ProfileMessage>,
) -> Element<'a, ProfileMessage> {
    container(
        column![text(title).size(20).color(ProfileTheme::TEXT_PRIMARY), body]
            .spacing(15),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::card)
    .into()
}

fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    secure: bool,
    on_input: impl Fn(String) -> ProfileMessage + 'a,
) -> Element<'a, ProfileMessage> {
    column![
        text(label).size(14).color(ProfileTheme::TEXT_SECONDARY),
        text_input(label, value)
            .on_input(on_input)
            .secure(secure)
            .padding(10),
    ]
    .spacing(5)
    .into()
}

fn submit_button<'a>(
    label: &'a str,
    saving: bool,
    message: ProfileMessage,
) -> Element<'a, ProfileMessage> {
    let label = if saving { "Saving..." } else { label };
    button(text(label))
        .on_press_maybe((!saving).then_some(message))
        .style(button::primary)
        .padding([10, 20])
        .into()
}

fn divider<'a>() -> Element<'a, ProfileMessage> {
    container(column![])
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(theme::divider)
        .into()
}
