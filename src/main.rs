use cushy::{
    context::GraphicsContext,
    kludgine::{
        app::winit::{event::MouseButton, keyboard::KeyCode},
        figures::{units::Px, FloatConversion, Point, Px2D, Rect, Size},
        shapes::{Path, PathBuilder, Shape},
        Color,
    },
    widgets::Canvas,
    Run, Tick,
};

use fieldlines::{
    app::FieldApp,
    config,
    field::{GridSpec, Sample},
    vec2::Vec2,
};

const BG_COL: Color = Color::BLACK;
const FG_COL: Color = Color::new(0, 200, 0, 255);

/// Edge detector over cushy's level-triggered key/button state: fires once
/// on the frame a press begins, stays quiet while held.
#[derive(Debug, Default, Clone, Copy)]
struct PressGuard {
    held: bool,
}

impl PressGuard {
    fn rising(&mut self, held: bool) -> bool {
        let fired = held && !self.held;
        self.held = held;
        fired
    }
}

#[derive(Default)]
struct InputGuards {
    raise: PressGuard,
    lower: PressGuard,
    clear: PressGuard,
    primary: PressGuard,
    secondary: PressGuard,
}

impl InputGuards {
    fn apply(&mut self, app: &mut FieldApp, cx: &mut GraphicsContext) {
        if self.raise.rising(cx.key_pressed(KeyCode::ArrowUp)) {
            app.raise_strength();
        }
        if self.lower.rising(cx.key_pressed(KeyCode::ArrowDown)) {
            app.lower_strength();
        }
        if self.clear.rising(cx.key_pressed(KeyCode::KeyC)) {
            app.clear();
        }

        let cursor = cx
            .cursor_position()
            .map(|p| Vec2::new(f64::from(p.x.into_float()), f64::from(p.y.into_float())));
        // Both guards advance every frame; the primary button wins when both
        // are pressed at once.
        let primary = self.primary.rising(cx.mouse_button_pressed(MouseButton::Left));
        let secondary = self
            .secondary
            .rising(cx.mouse_button_pressed(MouseButton::Right));
        if let Some(pos) = cursor {
            if primary {
                app.primary_press(pos);
            } else if secondary {
                app.secondary_press(pos);
            }
        }
    }
}

fn segment(a: Point<Px>, b: Point<Px>) -> Path<Px, false> {
    PathBuilder::new(a).line_to(b).build()
}

fn draw_field(app: &mut FieldApp, cx: &mut GraphicsContext) {
    let width = cx.gfx.size().width.into_float();
    let height = cx.gfx.size().height.into_float();
    cx.gfx.draw_shape(&Shape::filled_rect(
        Rect::new(Point::px(0.0, 0.0), Size::px(width, height)),
        BG_COL,
    ));

    let grid = GridSpec::for_size(width as u32, height as u32);
    for &Sample { origin, vector } in app.samples(grid) {
        let tip = origin + vector;
        cx.gfx.draw_shape(
            &segment(
                Point::px(origin.x as f32, origin.y as f32),
                Point::px(tip.x as f32, tip.y as f32),
            )
            .stroke(FG_COL),
        );
    }
}

fn main() -> cushy::Result<()> {
    let mut app = FieldApp::new();
    let mut input = InputGuards::default();

    Canvas::new(move |cx| {
        input.apply(&mut app, cx);
        draw_field(&mut app, cx);
    })
    .tick(Tick::redraws_per_second(config::FRAME_RATE))
    .run()
}
