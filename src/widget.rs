use crate::assets::{Assets, Sprite};
use crate::audio::AudioOut;
use crate::board::{Board, FrameOutcome};
use crate::graphics::{draw_label, draw_sprite, draw_sprite_rotated};
use crate::input::InputTracker;
use crate::roster::{self, CHARACTERS};
use crate::state::AppState;
use druid::kurbo::{Point, Size};
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{Error as PietError, ImageFormat, PietImage, Text, TextLayoutBuilder},
    Color, KbKey, TimerToken, Widget,
};
use std::time::{Duration, Instant};

/// Frame period of the board loop
const FRAME: Duration = Duration::from_millis(16);

/// Images uploaded to the render backend, built on first paint
struct SceneImages {
    background: PietImage,
    icon: PietImage,
    overlay: PietImage,
    volume_down: PietImage,
    volume_up: PietImage,
    portraits: Vec<(PietImage, PietImage)>,
    font_pages: Vec<PietImage>,
}

impl SceneImages {
    fn upload(ctx: &mut PaintCtx, assets: &Assets) -> Result<Self, PietError> {
        let mut image = |sprite: &Sprite| {
            ctx.make_image(
                sprite.width as usize,
                sprite.height as usize,
                &sprite.rgba,
                ImageFormat::RgbaSeparate,
            )
        };
        let background = image(&assets.background)?;
        let icon = image(&assets.icon)?;
        let overlay = image(&assets.overlay)?;
        let volume_down = image(&assets.volume_down)?;
        let volume_up = image(&assets.volume_up)?;
        let portraits = assets
            .portraits
            .iter()
            .map(|p| Ok((image(&p.normal)?, image(&p.pressed)?)))
            .collect::<Result<Vec<_>, PietError>>()?;
        let font_pages = assets
            .font_pages
            .iter()
            .map(&mut image)
            .collect::<Result<Vec<_>, PietError>>()?;
        Ok(SceneImages {
            background,
            icon,
            overlay,
            volume_down,
            volume_up,
            portraits,
            font_pages,
        })
    }
}

/// The sound board window contents
pub struct BoardWidget {
    board: Board,
    assets: Assets,
    audio: AudioOut,
    input: InputTracker,
    images: Option<SceneImages>,
    last: FrameOutcome,
    timer: TimerToken,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl BoardWidget {
    pub fn new(board: Board, assets: Assets, audio: AudioOut) -> Self {
        BoardWidget {
            board,
            assets,
            audio,
            input: InputTracker::new(),
            images: None,
            last: FrameOutcome::default(),
            timer: TimerToken::INVALID,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    fn paint_scene(&self, ctx: &mut PaintCtx, images: &SceneImages) -> Result<(), PietError> {
        let rc = &mut *ctx.render_ctx;
        let sprites = self.board.sprites().projection();
        let overlay = self.board.overlay().projection();
        let at = |(x, y): (f64, f64)| Point::new(x, y);

        draw_sprite(rc, &images.background, sprites, Point::ZERO, self.assets.background.size())?;

        let icon = self.board.icon();
        draw_sprite_rotated(
            rc,
            &images.icon,
            sprites,
            icon.pos,
            icon.origin,
            icon.size,
            icon.angle,
        )?;

        for ((normal, _), (character, portrait)) in images
            .portraits
            .iter()
            .zip(CHARACTERS.iter().zip(&self.assets.portraits))
        {
            draw_sprite(
                rc,
                normal,
                sprites,
                at(character.portrait_pos),
                portrait.normal.size(),
            )?;
        }

        draw_sprite(
            rc,
            &images.volume_down,
            sprites,
            at(roster::VOLUME_DOWN_POS),
            self.assets.volume_down.size(),
        )?;
        draw_sprite(
            rc,
            &images.volume_up,
            sprites,
            at(roster::VOLUME_UP_POS),
            self.assets.volume_up.size(),
        )?;

        for item in self.board.items() {
            draw_label(rc, &images.font_pages, &self.assets.font, sprites, item.label())?;
        }

        if let Some(index) = self.last.pressed {
            if let (Some((_, pressed)), Some(character), Some(portrait)) = (
                images.portraits.get(index),
                CHARACTERS.get(index),
                self.assets.portraits.get(index),
            ) {
                draw_sprite(
                    rc,
                    pressed,
                    overlay,
                    at(character.portrait_pos),
                    portrait.pressed.size(),
                )?;
            }
        }

        if self.last.show_overlay {
            draw_sprite(
                rc,
                &images.overlay,
                overlay,
                at(roster::OVERLAY_POS),
                self.assets.overlay.size(),
            )?;
        }

        Ok(())
    }

    fn paint_debug(&self, ctx: &mut PaintCtx) {
        let lines = [
            format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            format!("FPS: {:.2}", self.fps),
            format!("Volume: {:.1}", self.board.volume()),
            format!("Camera: {:.0} deg", self.board.camera().rotation()),
            format!(
                "Intro: {}/{}",
                self.board.effect().progress(),
                self.board.effect().duration()
            ),
            format!(
                "Icon: ({:.0}, {:.0})",
                self.board.icon().pos.x,
                self.board.icon().pos.y
            ),
        ];
        for (i, text) in lines.into_iter().enumerate() {
            let layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::WHITE)
                .build();
            if let Ok(layout) = layout {
                ctx.draw_text(&layout, (10.0, 10.0 + 20.0 * i as f64));
            }
        }
    }
}

impl Widget<AppState> for BoardWidget {
    /// Feeds window events into the input tracker and runs the frame loop
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                self.timer = ctx.request_timer(FRAME);
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::Timer(token) if *token == self.timer => {
                let snapshot = self.input.frame();
                self.last = self.board.frame(&snapshot, &self.audio);
                ctx.request_paint();
                self.timer = ctx.request_timer(FRAME);
            }
            Event::MouseDown(mouse_event) => {
                self.input.mouse_down(mouse_event.pos, mouse_event.button);
                ctx.set_active(true);
            }
            Event::MouseMove(mouse_event) => {
                self.input.mouse_move(mouse_event.pos);
            }
            Event::MouseUp(mouse_event) => {
                self.input.mouse_up(mouse_event.pos, mouse_event.button);
                if mouse_event.buttons.is_empty() {
                    ctx.set_active(false);
                }
            }
            Event::KeyDown(key_event) => match &key_event.key {
                KbKey::Character(s) if s == " " => self.input.set_space(true),
                KbKey::Character(s) => match s.as_str() {
                    "d" | "D" => {
                        data.debug = !data.debug;
                        ctx.request_paint();
                    }
                    "r" | "R" => self.board.start_intro(),
                    "q" | "Q" => ctx.submit_command(commands::QUIT_APP),
                    _ => {}
                },
                _ => {}
            },
            Event::KeyUp(key_event) => {
                if matches!(&key_event.key, KbKey::Character(s) if s == " ") {
                    self.input.set_space(false);
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        if let LifeCycle::FocusChanged(false) = event {
            self.input.release_all();
        }
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &AppState, data: &AppState, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Paints the board in draw order, then the diagnostics
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        ctx.fill(size.to_rect(), &roster::CLEAR_COLOR);

        if self.images.is_none() {
            match SceneImages::upload(ctx, &self.assets) {
                Ok(images) => self.images = Some(images),
                Err(err) => {
                    tracing::error!(%err, "cannot upload images");
                    return;
                }
            }
        }

        if let Some(images) = &self.images {
            if let Err(err) = self.paint_scene(ctx, images) {
                tracing::warn!(%err, "paint failed");
            }
        }

        if data.debug {
            self.paint_debug(ctx);
        }
    }
}

impl Drop for BoardWidget {
    fn drop(&mut self) {
        tracing::debug!(frames = self.board.frames(), "board widget released");
    }
}
