use std::cell::{
  Cell,
  RefCell
};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{
  AnimationFrame,
  request_animation_frame
};
use snowlist_core::snow::{
  ALPHA_DAMP,
  SnowField
};
use wasm_bindgen::JsCast;
use web_sys::{
  CanvasRenderingContext2d,
  HtmlCanvasElement
};
use yew::{
  Html,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

const FLAKE_FILL: &str =
  "rgba(255,255,255,0.9)";

/// Full-viewport decorative snowfall behind the panels. Owns its
/// own frame loop and has no data dependency on the task list.
#[function_component(SnowCanvas)]
pub fn snow_canvas() -> Html {
  let canvas_ref = use_node_ref();

  {
    let canvas_ref = canvas_ref.clone();
    use_effect_with((), move |_| {
      let handles = canvas_ref
        .cast::<HtmlCanvasElement>()
        .and_then(start_snow_loop);

      if handles.is_none() {
        tracing::warn!(
          "snow canvas unavailable, \
           skipping animation"
        );
      }

      move || {
        if let Some(handles) = handles
        {
          handles.state.pause();
        }
      }
    });
  }

  html! {
      <canvas
          ref={canvas_ref}
          class="snow-canvas"
          aria-hidden="true"
      ></canvas>
  }
}

struct SnowHandles {
  state:       Rc<SnowLoop>,
  _resize:     EventListener,
  _visibility: EventListener
}

struct SnowLoop {
  canvas:  HtmlCanvasElement,
  context: CanvasRenderingContext2d,
  field:   RefCell<SnowField>,
  frame:   RefCell<Option<AnimationFrame>>,
  last:    Cell<Option<f64>>,
  running: Cell<bool>
}

fn start_snow_loop(
  canvas: HtmlCanvasElement
) -> Option<SnowHandles> {
  let context = canvas
    .get_context("2d")
    .ok()
    .flatten()?
    .dyn_into::<CanvasRenderingContext2d>()
    .ok()?;

  let window = web_sys::window()?;
  let document = window.document()?;

  let state = Rc::new(SnowLoop {
    canvas,
    context,
    field: RefCell::new(
      SnowField::default()
    ),
    frame: RefCell::new(None),
    last: Cell::new(None),
    running: Cell::new(true)
  });

  state.fit_viewport();

  let resize = {
    let state = state.clone();
    EventListener::new(
      &window,
      "resize",
      move |_| state.fit_viewport()
    )
  };

  let visibility = {
    let state = state.clone();
    EventListener::new(
      &document,
      "visibilitychange",
      move |_| {
        if document_hidden() {
          state.pause();
        } else {
          state.resume();
        }
      }
    )
  };

  state.schedule();

  Some(SnowHandles {
    state,
    _resize: resize,
    _visibility: visibility
  })
}

fn document_hidden() -> bool {
  web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .map(|document| document.hidden())
    .unwrap_or(false)
}

impl SnowLoop {
  /// Matches the backing store to the viewport at device-pixel
  /// density and re-targets the particle count.
  fn fit_viewport(&self) {
    let Some(window) = web_sys::window()
    else {
      return;
    };

    let dpr =
      window.device_pixel_ratio();
    let width = window
      .inner_width()
      .ok()
      .and_then(|v| v.as_f64())
      .unwrap_or(0.0);
    let height = window
      .inner_height()
      .ok()
      .and_then(|v| v.as_f64())
      .unwrap_or(0.0);

    self.canvas.set_width(
      (width * dpr).floor().max(1.0)
        as u32
    );
    self.canvas.set_height(
      (height * dpr).floor().max(1.0)
        as u32
    );

    let style = self.canvas.style();
    let _ = style.set_property(
      "width",
      &format!("{width}px")
    );
    let _ = style.set_property(
      "height",
      &format!("{height}px")
    );

    let _ = self.context.set_transform(
      dpr, 0.0, 0.0, dpr, 0.0, 0.0
    );

    let mut rng = js_sys::Math::random;
    self.field.borrow_mut().resize(
      width, height, &mut rng
    );
  }

  fn schedule(self: &Rc<Self>) {
    let state = self.clone();
    let handle = request_animation_frame(
      move |now| state.on_frame(now)
    );
    *self.frame.borrow_mut() =
      Some(handle);
  }

  fn on_frame(self: &Rc<Self>, now: f64) {
    if !self.running.get() {
      return;
    }

    // First frame after a (re)start establishes the baseline, so a
    // long pause never shows up as one huge delta.
    let dt = match self
      .last
      .replace(Some(now))
    {
      | Some(last) => now - last,
      | None => 0.0
    };

    let mut rng = js_sys::Math::random;
    self
      .field
      .borrow_mut()
      .step(dt, &mut rng);

    self.draw();
    self.schedule();
  }

  fn draw(&self) {
    let field = self.field.borrow();
    let (width, height) = field.size();

    self.context.clear_rect(
      0.0, 0.0, width, height
    );
    self
      .context
      .set_fill_style_str(FLAKE_FILL);

    for particle in field.particles() {
      self.context.set_global_alpha(
        particle.alpha * ALPHA_DAMP
      );
      self.context.begin_path();
      let _ = self.context.arc(
        particle.x,
        particle.y,
        particle.radius,
        0.0,
        TAU
      );
      self.context.fill();
    }

    self.context.set_global_alpha(1.0);
  }

  fn pause(&self) {
    self.running.set(false);
    self.frame.borrow_mut().take();
  }

  fn resume(self: &Rc<Self>) {
    if self.running.get() {
      return;
    }
    self.running.set(true);
    self.last.set(None);
    self.schedule();
  }
}
