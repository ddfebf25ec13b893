//! Templating code.
//!
//! This defines the [`Page`] item, which wraps every rendered page in the
//! shared chrome (navbar, bootstrap, viewport meta).

use hypertext::prelude::*;

use crate::auth::Admin;

pub struct Page<R: Renderable> {
    body: Option<R>,
    user: Option<Admin>,
}

impl<R: Renderable> Page<R> {
    pub fn new() -> Self {
        Self {
            body: None,
            user: None,
        }
    }

    pub fn body(mut self, body: R) -> Self {
        self.body = Some(body);
        self
    }

    pub fn user(mut self, user: Admin) -> Self {
        self.user = Some(user);
        self
    }

    pub fn user_opt(mut self, user: Option<Admin>) -> Self {
        self.user = user;
        self
    }
}

impl<R: Renderable> Renderable for Page<R> {
    fn render_to(
        &self,
        buffer: &mut hypertext::Buffer<hypertext::context::Node>,
    ) {
        maud! {
            html {
                head {
                    title { "PubScore" }
                    link
                        href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                        rel="stylesheet"
                        integrity="sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH"
                        crossorigin="anonymous";
                    meta
                        name="viewport"
                        content="width=device-width, initial-scale=1";
                }
                body class="d-flex flex-column vh-100" {
                    nav class="navbar navbar-expand"
                        style="background-color: #452859;"
                        data-bs-theme="dark" {
                        div class="container-fluid" {
                            a class="navbar-brand text-white" href="/" {
                                "PubScore"
                            }
                            ul class="navbar-nav me-auto" {
                                li class="nav-item" {
                                    a class="nav-link text-white" href="/overview" {
                                        "Overview"
                                    }
                                }
                                @if self.user.is_some() {
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/updateteams" {
                                            "Update teams"
                                        }
                                    }
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/addteam" {
                                            "Add team"
                                        }
                                    }
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/contact" {
                                            "Contact"
                                        }
                                    }
                                }
                            }
                            ul class="navbar-nav" {
                                @if let Some(user) = &self.user {
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/admin" {
                                            (user.username)
                                        }
                                    }
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/logout" {
                                            "Logout"
                                        }
                                    }
                                } @else {
                                    li class="nav-item" {
                                        a class="nav-link text-white" href="/login" {
                                            "Login"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div class="container flex-grow-1 mt-4" {
                        @if let Some(body) = &self.body {
                            (body)
                        }
                    }
                }
            }
        }
        .render_to(buffer)
    }
}

impl<R: Renderable> Default for Page<R> {
    fn default() -> Self {
        Self::new()
    }
}
