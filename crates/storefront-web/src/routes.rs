use yew_router::Routable;

/// Server-rendered pages the client redirects to. Navigation is always a
/// full page load.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/auth/login")]
    Login,
}
