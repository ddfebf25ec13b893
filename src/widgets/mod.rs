//! Small reusable page fragments.

use hypertext::prelude::*;

pub struct ErrorAlert<S> {
    pub msg: S,
}

impl<S: ToString> Renderable for ErrorAlert<S> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            div class="alert alert-danger mt-3"
                style="border-left: 4px solid #452859;"
                role="alert" {
                (self.msg.to_string())
            }
        }
        .render_to(buffer);
    }
}

/// A row of link buttons, used on the admin dashboard.
pub struct Actions<'r> {
    pub options: &'r [(&'r str, &'r str)],
}

impl<'r> Renderable for Actions<'r> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            div class="row mt-3 mb-3" {
                @for (link, text) in self.options {
                    div class="col-md-auto" {
                        a class="btn btn-primary" href=(link) {
                            (text)
                        }
                    }
                }
            }
        }
        .render_to(buffer);
    }
}
