mod app;
mod browse;
mod overlays;

pub(crate) use app::AppController;
