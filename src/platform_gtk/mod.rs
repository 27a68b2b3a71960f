//! GTK4 shell: a name field, "Graph"/"Clear" buttons and a drawing area.
//!
//! Widget signals are translated into the engine's three events
//! (`on_submit_name`, `on_clear`, `on_resize`); drawing goes through the
//! Cairo backend.

use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::{NameSurferEngine, SubmitOutcome};
use crate::database::EntryLookup;
use crate::render::{CairoContextRenderer, Renderer};

type SharedEngine<R, L> = Rc<RefCell<NameSurferEngine<R, L>>>;

pub struct GtkNameSurferAdapter<R, L>
where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    engine: SharedEngine<R, L>,
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
}

impl<R, L> GtkNameSurferAdapter<R, L>
where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    #[must_use]
    pub fn new(engine: NameSurferEngine<R, L>) -> Self {
        let engine = Rc::new(RefCell::new(engine));

        let name_entry = gtk::Entry::new();
        name_entry.set_width_chars(30);
        let graph_button = gtk::Button::with_label("Graph");
        let clear_button = gtk::Button::with_label("Clear");

        let controls = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        controls.append(&gtk::Label::new(Some("Name")));
        controls.append(&name_entry);
        controls.append(&graph_button);
        controls.append(&clear_button);

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        let viewport = engine.borrow().viewport();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.append(&controls);
        root.append(&drawing_area);

        connect_draw(&drawing_area, &engine);
        connect_resize(&drawing_area, &engine);
        connect_submit(&name_entry, &graph_button, &drawing_area, &engine);
        connect_clear(&clear_button, &drawing_area, &engine);

        Self {
            engine,
            root,
            drawing_area,
        }
    }

    /// Top-level widget to place inside a window.
    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R, L> {
        Rc::clone(&self.engine)
    }

    /// Hosts the adapter in a new application window and shows it.
    pub fn present(&self, app: &gtk::Application) -> gtk::ApplicationWindow {
        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("NameSurfer")
            .child(&self.root)
            .build();
        window.present();
        window
    }
}

fn connect_draw<R, L>(area: &gtk::DrawingArea, engine: &SharedEngine<R, L>)
where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_area, context, _width, _height| {
        let Ok(mut engine) = engine.try_borrow_mut() else {
            return;
        };
        if let Err(err) = engine.render_on_cairo_context(context) {
            warn!(error = %err, "failed to draw name chart");
        }
    });
}

fn connect_resize<R, L>(area: &gtk::DrawingArea, engine: &SharedEngine<R, L>)
where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    let engine = Rc::clone(engine);
    area.connect_resize(move |area, width, height| {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            return;
        };
        let Ok(mut engine) = engine.try_borrow_mut() else {
            return;
        };
        match engine.on_resize(width, height) {
            Ok(()) => area.queue_draw(),
            Err(err) => warn!(error = %err, "ignoring resize"),
        }
    });
}

fn connect_submit<R, L>(
    name_entry: &gtk::Entry,
    graph_button: &gtk::Button,
    area: &gtk::DrawingArea,
    engine: &SharedEngine<R, L>,
) where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    let submit = {
        let engine = Rc::clone(engine);
        let name_entry = name_entry.clone();
        let area = area.clone();
        Rc::new(move || {
            let text = name_entry.text();
            let Ok(mut engine) = engine.try_borrow_mut() else {
                return;
            };
            match engine.on_submit_name(text.as_str()) {
                Ok(SubmitOutcome::Added { .. }) => {
                    name_entry.set_text("");
                    area.queue_draw();
                }
                Ok(SubmitOutcome::NotFound) => {}
                Err(err) => warn!(error = %err, "failed to plot name"),
            }
        })
    };

    let on_activate = Rc::clone(&submit);
    name_entry.connect_activate(move |_| on_activate());
    graph_button.connect_clicked(move |_| submit());
}

fn connect_clear<R, L>(
    clear_button: &gtk::Button,
    area: &gtk::DrawingArea,
    engine: &SharedEngine<R, L>,
) where
    R: Renderer + CairoContextRenderer + 'static,
    L: EntryLookup + 'static,
{
    let engine = Rc::clone(engine);
    let area = area.clone();
    clear_button.connect_clicked(move |_| {
        let Ok(mut engine) = engine.try_borrow_mut() else {
            return;
        };
        match engine.on_clear() {
            Ok(()) => area.queue_draw(),
            Err(err) => warn!(error = %err, "failed to clear chart"),
        }
    });
}
