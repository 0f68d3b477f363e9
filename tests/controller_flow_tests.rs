use glam::Vec2;
use spatial_graph_editor::{
    AppCommand, AppController, AppIntent, AppState, DeleteModifiers, EditorPhase, Segment,
    SegmentId,
};

fn click(controller: &mut AppController, state: &mut AppState, world_pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { world_pos })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::PrimaryPressed { world_pos })
        .expect("PrimaryPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::ButtonReleased)
        .expect("ButtonReleased sollte ohne Fehler durchlaufen");
}

fn right_click(
    controller: &mut AppController,
    state: &mut AppState,
    world_pos: Vec2,
    modifiers: DeleteModifiers,
) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { world_pos })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            state,
            AppIntent::SecondaryPressed {
                world_pos,
                modifiers,
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");
}

/// Polylinie (0,0) → (100,0) → (100,100), letzter Punkt bleibt selektiert.
fn make_polyline() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    (controller, state)
}

#[test]
fn test_clicks_build_connected_polyline_with_envelopes() {
    let (_, state) = make_polyline();

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.segment_count(), 2);
    assert_eq!(state.graph.envelopes().count(), 2);
    assert_eq!(state.editor.phase(), EditorPhase::PointSelected);

    let selected = state
        .editor
        .selected
        .and_then(|id| state.graph.point(id))
        .expect("Letzter Punkt selektiert");
    assert_eq!(selected.position, Vec2::new(100.0, 100.0));
}

#[test]
fn test_click_near_existing_point_snaps_and_closes_loop() {
    let (mut controller, mut state) = make_polyline();

    click(&mut controller, &mut state, Vec2::new(10.0, 5.0));

    assert_eq!(state.point_count(), 3, "Kein neuer Punkt beim Einrasten");
    assert_eq!(state.segment_count(), 3);
    let first = state.graph.point_at(Vec2::ZERO).expect("Startpunkt");
    assert_eq!(state.editor.selected, Some(first.id));
}

#[test]
fn test_reselecting_connected_neighbor_adds_no_duplicate() {
    let (mut controller, mut state) = make_polyline();

    click(&mut controller, &mut state, Vec2::new(100.0, 2.0));

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.segment_count(), 2);
}

#[test]
fn test_drag_moves_point_and_connected_roads_until_release() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::PrimaryPressed {
                world_pos: Vec2::new(100.0, 0.0),
            },
        )
        .expect("PrimaryPressed");
    assert_eq!(state.editor.phase(), EditorPhase::Dragging);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(100.0, 50.0),
            },
        )
        .expect("PointerMoved");
    controller
        .handle_intent(&mut state, AppIntent::ButtonReleased)
        .expect("ButtonReleased");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(300.0, 300.0),
            },
        )
        .expect("PointerMoved");

    let moved = state.graph.point_at(Vec2::new(100.0, 50.0)).expect("Verschoben");
    assert_eq!(state.editor.selected, Some(moved.id));
    assert_eq!(state.editor.phase(), EditorPhase::PointSelected);

    let segment = state.graph.segments().next().expect("Segment");
    let ends = [segment.p1.position, segment.p2.position];
    assert!(ends.contains(&Vec2::ZERO));
    assert!(ends.contains(&Vec2::new(100.0, 50.0)));
    let envelope = state.graph.envelopes().next().expect("Envelope");
    assert_eq!(envelope.skeleton().p2.position, Vec2::new(100.0, 50.0));
}

#[test]
fn test_plain_right_click_only_clears_selection() {
    let (mut controller, mut state) = make_polyline();

    right_click(
        &mut controller,
        &mut state,
        Vec2::new(50.0, 1.0),
        DeleteModifiers::default(),
    );

    assert_eq!(state.editor.phase(), EditorPhase::Idle);
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.segment_count(), 2);
}

#[test]
fn test_shift_right_click_removes_nearest_segment() {
    let (mut controller, mut state) = make_polyline();

    right_click(
        &mut controller,
        &mut state,
        Vec2::new(50.0, 4.0),
        DeleteModifiers {
            precise_delete: true,
            remove_point: false,
        },
    );

    assert_eq!(state.segment_count(), 1);
    assert_eq!(state.point_count(), 3);
    assert!(!state.graph.contains_segment(&Segment::new(
        state.graph.point_at(Vec2::ZERO).copied().expect("P1"),
        state
            .graph
            .point_at(Vec2::new(100.0, 0.0))
            .copied()
            .expect("P2"),
        SegmentId(0),
    )));
    assert!(state.editor.selected.is_none());
}

#[test]
fn test_shift_right_click_far_from_segments_keeps_graph() {
    let (mut controller, mut state) = make_polyline();

    right_click(
        &mut controller,
        &mut state,
        Vec2::new(-200.0, -200.0),
        DeleteModifiers {
            precise_delete: true,
            remove_point: false,
        },
    );

    assert_eq!(state.segment_count(), 2);
}

#[test]
fn test_ctrl_right_click_removes_hovered_point_with_segments() {
    let (mut controller, mut state) = make_polyline();

    right_click(
        &mut controller,
        &mut state,
        Vec2::new(98.0, 3.0),
        DeleteModifiers {
            precise_delete: false,
            remove_point: true,
        },
    );

    assert_eq!(state.point_count(), 2);
    assert_eq!(state.segment_count(), 0);
    assert!(state.graph.point_at(Vec2::new(100.0, 0.0)).is_none());
    assert!(state.editor.hovered.is_none());
}

#[test]
fn test_ctrl_right_click_after_drag_removes_dragged_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, Vec2::new(0.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    for intent in [
        AppIntent::PointerMoved {
            world_pos: Vec2::new(100.0, 0.0),
        },
        AppIntent::PrimaryPressed {
            world_pos: Vec2::new(100.0, 0.0),
        },
        AppIntent::PointerMoved {
            world_pos: Vec2::new(110.0, 0.0),
        },
        AppIntent::ButtonReleased,
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Drag sollte ohne Fehler durchlaufen");
    }
    let dragged = state
        .graph
        .point_at(Vec2::new(110.0, 0.0))
        .map(|p| p.id)
        .expect("Gezogener Punkt");
    assert_eq!(state.editor.hovered, Some(dragged));

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryPressed {
                world_pos: Vec2::new(110.0, 0.0),
                modifiers: DeleteModifiers {
                    precise_delete: false,
                    remove_point: true,
                },
            },
        )
        .expect("SecondaryPressed sollte ohne Fehler durchlaufen");

    let remaining: Vec<Vec2> = state.graph.points().map(|p| p.position).collect();
    assert_eq!(remaining, vec![Vec2::ZERO]);
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_reset_requested_empties_graph_and_selection() {
    let (mut controller, mut state) = make_polyline();

    controller
        .handle_intent(&mut state, AppIntent::ResetGraphRequested)
        .expect("ResetGraphRequested sollte ohne Fehler durchlaufen");

    assert!(state.graph.is_empty());
    assert_eq!(state.editor.phase(), EditorPhase::Idle);

    click(&mut controller, &mut state, Vec2::new(5.0, 5.0));
    assert_eq!(state.point_count(), 1);
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_save_requested_keeps_graph_and_reports_status() {
    let (mut controller, mut state) = make_polyline();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.point_count(), 3);
    assert!(state.status_message.is_some());
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}

#[test]
fn test_remove_point_command_clears_stale_selection() {
    let (mut controller, mut state) = make_polyline();
    let selected = state.editor.selected.expect("Letzter Punkt selektiert");

    controller
        .handle_command(&mut state, AppCommand::RemovePoint { point_id: selected })
        .expect("RemovePoint sollte ohne Fehler durchlaufen");

    assert!(state.editor.selected.is_none());
    assert_eq!(state.point_count(), 2);
    assert_eq!(state.segment_count(), 1);
}

#[test]
fn test_zoom_is_clamped_to_options() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..100 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::CameraZoom {
                    factor: 2.0,
                    focus_world: None,
                },
            )
            .expect("CameraZoom");
    }
    assert_eq!(state.view.camera.zoom, state.options.camera_zoom_max);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCameraRequested");
    assert_eq!(state.view.camera.zoom, 1.0);
}

#[test]
fn test_viewport_resize_and_pan_update_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1000.0, 800.0],
            },
        )
        .expect("ViewportResized");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(15.0, -5.0),
            },
        )
        .expect("CameraPan");

    assert_eq!(state.view.viewport_size, [1000.0, 800.0]);
    assert_eq!(state.view.camera.position, Vec2::new(15.0, -5.0));
}

#[test]
fn test_render_scene_reflects_graph() {
    let (controller, state) = make_polyline();

    let scene = controller.build_render_scene(&state);

    // Zeiger, 2 Segmente, 3 Punkte, 2 Envelopes, Hover- und Selektions-Ring
    assert!(scene.commands.len() >= 9);
    assert_eq!(scene.clear_color, state.options.background_color);
}
