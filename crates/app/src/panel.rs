//! Control panel UI
//!
//! A column of shape and action buttons plus the status text region,
//! rendered with Bevy UI. Buttons write the same messages as the hotkeys.

use bevy::prelude::*;

use ecorche_config::DEFAULT_STATUS;
use ecorche_scene::{RevealActionEvent, ShapeChange, StatusLine};
use ecorche_types::{RevealAction, ShapeKind, ShapeRequest};

const BUTTON_COLOR: Color = Color::srgb(0.17, 0.17, 0.19);
const BUTTON_HOVER_COLOR: Color = Color::srgb(0.24, 0.24, 0.27);
const BUTTON_PRESS_COLOR: Color = Color::srgb(0.32, 0.32, 0.36);

#[derive(Component)]
struct ActionButton(RevealAction);

#[derive(Component)]
struct ShapeButton(ShapeKind);

#[derive(Component)]
struct StatusText;

pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_panel).add_systems(
            Update,
            (
                handle_shape_buttons,
                handle_action_buttons,
                update_button_tint,
                update_status_text,
            ),
        );
    }
}

fn setup_panel(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|panel| {
            for kind in ShapeKind::ALL {
                spawn_button(panel, kind.label(), ShapeButton(kind));
            }
            // Gap between the shape selector and the reveal actions.
            panel.spawn(Node {
                height: Val::Px(12.0),
                ..default()
            });
            for action in RevealAction::ALL {
                spawn_button(panel, action.label(), ActionButton(action));
            }
        });

    commands.spawn((
        Text::new(DEFAULT_STATUS),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
        StatusText,
    ));
}

fn spawn_button(parent: &mut ChildSpawnerCommands, label: &str, marker: impl Bundle) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(150.0),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            marker,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn handle_shape_buttons(
    interactions: Query<(&Interaction, &ShapeButton), Changed<Interaction>>,
    mut shapes: MessageWriter<ShapeChange>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            shapes.write(ShapeChange(ShapeRequest::Primitive(button.0)));
        }
    }
}

fn handle_action_buttons(
    interactions: Query<(&Interaction, &ActionButton), Changed<Interaction>>,
    mut actions: MessageWriter<RevealActionEvent>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            actions.write(RevealActionEvent(button.0));
        }
    }
}

fn update_button_tint(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut color) in &mut interactions {
        color.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESS_COLOR,
            Interaction::Hovered => BUTTON_HOVER_COLOR,
            Interaction::None => BUTTON_COLOR,
        };
    }
}

fn update_status_text(status: Res<StatusLine>, mut texts: Query<&mut Text, With<StatusText>>) {
    if !status.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = status.text().to_string();
    }
}
