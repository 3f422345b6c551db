use druid::{
    widget::{prelude::*, ListIter},
    Data, Point, Rect, Selector, WidgetPod,
};

use crate::ui::theme;

const DRAG_THRESHOLD: f64 = 4.0;

/// Tracks mouse gestures over a column of fixed-height rows. A press that
/// stays within the drag threshold activates the row under the pointer; a
/// press dragged past it picks the row up and reports the drop with the keys
/// of the picked row and the row it landed on.
pub struct DragReorder<T, C, P> {
    child: WidgetPod<T, Box<dyn Widget<T>>>,
    row_height: f64,
    key: Box<dyn Fn(&C) -> P>,
    tapped: Selector<P>,
    dropped: Selector<(P, P)>,
    gesture: Option<DragGesture>,
}

struct DragGesture {
    pressed: usize,
    over: usize,
    origin: Point,
    engaged: bool,
}

impl<T, C, P> DragReorder<T, C, P>
where
    T: ListIter<C>,
    C: Data,
    P: Clone + 'static,
{
    pub fn new(
        child: impl Widget<T> + 'static,
        row_height: f64,
        key: impl Fn(&C) -> P + 'static,
        tapped: Selector<P>,
        dropped: Selector<(P, P)>,
    ) -> Self {
        Self {
            child: WidgetPod::new(child).boxed(),
            row_height,
            key: Box::new(key),
            tapped,
            dropped,
            gesture: None,
        }
    }

    fn slot_at(&self, y: f64, len: usize) -> Option<usize> {
        if y < 0.0 || len == 0 {
            return None;
        }
        let slot = (y / self.row_height).floor() as usize;
        (slot < len).then_some(slot)
    }

    fn clamped_slot_at(&self, y: f64, len: usize) -> usize {
        let slot = (y.max(0.0) / self.row_height).floor() as usize;
        slot.min(len.saturating_sub(1))
    }

    fn key_at(&self, data: &T, index: usize) -> Option<P> {
        let mut found = None;
        data.for_each(|item, i| {
            if i == index {
                found = Some((self.key)(item));
            }
        });
        found
    }
}

impl<T, C, P> Widget<T> for DragReorder<T, C, P>
where
    T: ListIter<C> + Data,
    C: Data,
    P: Clone + 'static,
{
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::MouseDown(mouse) if mouse.button.is_left() && !ctx.is_disabled() => {
                if let Some(pressed) = self.slot_at(mouse.pos.y, data.data_len()) {
                    self.gesture = Some(DragGesture {
                        pressed,
                        over: pressed,
                        origin: mouse.pos,
                        engaged: false,
                    });
                    ctx.set_active(true);
                }
            }
            Event::MouseMove(mouse) if ctx.is_active() => {
                let over = self.clamped_slot_at(mouse.pos.y, data.data_len());
                if let Some(gesture) = self.gesture.as_mut() {
                    if !gesture.engaged && (mouse.pos - gesture.origin).hypot() >= DRAG_THRESHOLD {
                        gesture.engaged = true;
                        ctx.request_paint();
                    }
                    if gesture.engaged && over != gesture.over {
                        gesture.over = over;
                        ctx.request_paint();
                    }
                }
            }
            Event::MouseUp(_) if ctx.is_active() => {
                ctx.set_active(false);
                ctx.request_paint();
                if let Some(gesture) = self.gesture.take() {
                    if gesture.engaged {
                        if gesture.over != gesture.pressed {
                            if let (Some(picked), Some(target)) = (
                                self.key_at(data, gesture.pressed),
                                self.key_at(data, gesture.over),
                            ) {
                                ctx.submit_command(self.dropped.with((picked, target)));
                            }
                        }
                    } else if ctx.is_hot() {
                        if let Some(key) = self.key_at(data, gesture.pressed) {
                            ctx.submit_command(self.tapped.with(key));
                        }
                    }
                }
            }
            _ => {
                self.child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        self.child.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.child.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.child.layout(ctx, bc, data, env);
        self.child.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.child.paint(ctx, data, env);
        if let Some(gesture) = &self.gesture {
            if gesture.engaged {
                let top = gesture.over as f64 * self.row_height;
                let slot = Rect::new(0.0, top, ctx.size().width, top + self.row_height)
                    .inset(-1.0)
                    .to_rounded_rect(env.get(theme::CORNER_RADIUS));
                ctx.stroke(slot, &env.get(theme::PRIMARY_DARK), 2.0);
            }
        }
    }
}
