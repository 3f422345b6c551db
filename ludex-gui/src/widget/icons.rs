use druid::{kurbo::BezPath, widget::prelude::*, Affine, Color, KeyOrValue, Size};

use crate::ui::theme;

pub static BACK: SvgIcon = SvgIcon {
    data: "M9.70711 0.292893C10.0976 0.683417 10.0976 1.31658 9.70711 1.70711L2.41421 9L9.70711 16.2929C10.0976 16.6834 10.0976 17.3166 9.70711 17.7071C9.31658 18.0976 8.68342 18.0976 8.29289 17.7071L0.292893 9.70711C-0.0976311 9.31658 -0.0976311 8.68342 0.292893 8.29289L8.29289 0.292893C8.68342 -0.0976311 9.31658 -0.0976311 9.70711 0.292893Z",
    size: Size::new(10.0, 18.0),
};
pub static SAD_FACE: SvgIcon = SvgIcon {
    data: "M5.42858 8.00001C5.90197 8.00001 6.28573 7.61625 6.28573 7.14286C6.28573 6.66948 5.90197 6.28572 5.42858 6.28572C4.9552 6.28572 4.57144 6.66948 4.57144 7.14286C4.57144 7.61625 4.9552 8.00001 5.42858 8.00001Z M8.00002 9.14285C9.62216 9.14285 10.9864 10.1975 11.4182 11.6368C11.4304 11.6797 11.4322 11.725 11.4237 11.7688C11.4152 11.8126 11.3965 11.8539 11.3692 11.8892C11.3419 11.9245 11.3066 11.9529 11.2664 11.9722C11.2261 11.9914 11.1818 12.0009 11.1372 12H4.86252C4.81802 12.0006 4.77398 11.9909 4.73391 11.9716C4.69385 11.9522 4.65885 11.9237 4.63173 11.8885C4.6046 11.8532 4.58609 11.8121 4.57767 11.7684C4.56925 11.7247 4.57115 11.6796 4.58323 11.6368C5.01144 10.1975 6.37609 9.14285 8.00002 9.14285Z M10.5714 8.00001C11.0448 8.00001 11.4286 7.61625 11.4286 7.14286C11.4286 6.66948 11.0448 6.28572 10.5714 6.28572C10.0981 6.28572 9.71429 6.66948 9.71429 7.14286C9.71429 7.61625 10.0981 8.00001 10.5714 8.00001Z M8.00001 1.07144C4.17347 1.07144 1.07144 4.17347 1.07144 8.00001C1.07144 11.8266 4.17347 14.9286 8.00001 14.9286C11.8266 14.9286 14.9286 11.8266 14.9286 8.00001C14.9286 4.17347 11.8266 1.07144 8.00001 1.07144ZM0.0714417 8.00001C0.0714417 3.62118 3.62118 0.0714417 8.00001 0.0714417C12.3788 0.0714417 15.9286 3.62118 15.9286 8.00001C15.9286 12.3788 12.3788 15.9286 8.00001 15.9286C3.62118 15.9286 0.0714417 12.3788 0.0714417 8.00001Z",
    size: Size::new(16.0, 16.0),
};

/// Filled icon path in the coordinates of the original SVG.
pub struct SvgIcon {
    data: &'static str,
    size: Size,
}

impl SvgIcon {
    /// Makes a widget of the icon, with the path scaled to the wanted size.
    pub fn scaled(&self, to: impl Into<Size>) -> Icon {
        let size = to.into();
        let mut path = BezPath::from_svg(self.data).expect("Malformed icon path");
        path.apply_affine(Affine::scale_non_uniform(
            size.width / self.size.width,
            size.height / self.size.height,
        ));
        Icon {
            path,
            size,
            color: theme::ICON_COLOR.into(),
        }
    }
}

pub struct Icon {
    path: BezPath,
    size: Size,
    color: KeyOrValue<Color>,
}

impl Icon {
    pub fn with_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.color = color.into();
        self
    }
}

impl<T> Widget<T> for Icon {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut T, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let color = self.color.resolve(env);
        ctx.fill(&self.path, &color);
    }
}
