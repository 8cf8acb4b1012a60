//! Which frameworks make sense for which language.
//!
//! `unknown` is permitted everywhere. A language of `unknown` permits every
//! framework, since nothing is known that could rule one out.

use super::values::{Framework, FrontendFramework, Language, Unspecified};

const JS_FRONTENDS: &[FrontendFramework] = &[
    FrontendFramework::React,
    FrontendFramework::Next,
    FrontendFramework::Remix,
    FrontendFramework::Angular,
    FrontendFramework::Vue,
    FrontendFramework::Svelte,
    FrontendFramework::Sveltekit,
    FrontendFramework::Nuxt,
    FrontendFramework::Solid,
    FrontendFramework::Qwik,
    FrontendFramework::Astro,
    FrontendFramework::Ember,
    FrontendFramework::Unknown,
];

const NO_FRONTENDS: &[FrontendFramework] = &[FrontendFramework::Unknown];

/// Back-end frameworks permitted for `language`, concrete values first
pub fn allowed_frameworks(language: Language) -> &'static [Framework] {
    use Framework::*;

    match language {
        Language::JavascriptTypescript => &[Node, Deno, Bun, Express, Fastify, Nest, Unknown],
        Language::Python => &[Django, Flask, Fastapi, Unknown],
        Language::Java => &[Spring, Unknown],
        Language::Csharp => &[Dotnet, Unknown],
        Language::Go => &[Gin, Unknown],
        Language::Rust => &[Axum, Rocket, Unknown],
        Language::Php => &[Laravel, Unknown],
        Language::Ruby => &[Rails, Unknown],
        Language::Kotlin => &[Ktor, Spring, Unknown],
        Language::Swift => &[Vapor, Unknown],
        Language::Elixir => &[Phoenix, Unknown],
        Language::Scala => &[Play, Unknown],
        Language::Clojure => &[Pedestal, Unknown],
        Language::Fsharp => &[Dotnet, Unknown],
        Language::Dart => &[Shelf, Unknown],
        Language::Sql | Language::Bash => &[Unknown],
        Language::Unknown => Framework::ALL,
    }
}

/// Front-end frameworks permitted for `language`
pub fn allowed_frontend_frameworks(language: Language) -> &'static [FrontendFramework] {
    match language {
        Language::JavascriptTypescript => JS_FRONTENDS,
        Language::Unknown => FrontendFramework::ALL,
        _ => NO_FRONTENDS,
    }
}

pub fn is_framework_allowed(language: Language, framework: Framework) -> bool {
    allowed_frameworks(language).contains(&framework)
}

pub fn is_frontend_allowed(language: Language, frontend: FrontendFramework) -> bool {
    allowed_frontend_frameworks(language).contains(&frontend)
}

/// First concrete back-end framework for `language`, or `unknown`
pub fn default_framework(language: Language) -> Framework {
    if language.is_unknown() {
        return Framework::Unknown;
    }
    allowed_frameworks(language)
        .iter()
        .copied()
        .find(|f| !f.is_unknown())
        .unwrap_or(Framework::Unknown)
}

/// Front-end framework offered as the fallback for `language`
pub fn default_frontend(language: Language) -> Option<FrontendFramework> {
    match language {
        Language::JavascriptTypescript => Some(FrontendFramework::React),
        _ => None,
    }
}

/// Keep `framework` if `language` permits it, otherwise fall back to the default
pub fn clamp_framework(language: Language, framework: Framework) -> Framework {
    if is_framework_allowed(language, framework) {
        framework
    } else {
        default_framework(language)
    }
}

/// Drop front-end frameworks `language` does not permit.
///
/// A set emptied by clamping falls back to the language's default front-end,
/// or stays empty when the language has none.
pub fn clamp_frontend_frameworks(
    language: Language,
    frontends: &[FrontendFramework],
) -> Vec<FrontendFramework> {
    let kept: Vec<FrontendFramework> = frontends
        .iter()
        .copied()
        .filter(|f| is_frontend_allowed(language, *f))
        .collect();

    if kept.is_empty() && !frontends.is_empty() {
        return default_frontend(language).into_iter().collect();
    }
    kept
}
