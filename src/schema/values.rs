use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A wire identifier that does not belong to the enumeration it was parsed as
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// Enumerations that carry an explicit "unspecified" member
pub trait Unspecified: Copy + PartialEq {
    const UNKNOWN: Self;

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Declares an answer enumeration with its wire identifiers and UI labels.
///
/// Every enumeration must list an `Unknown` member; the sentinel is how the
/// wizard says "not specified" without leaving a field empty.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Identifier used in JSON and query strings
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human readable label
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Unspecified for $name {
            const UNKNOWN: Self = $name::Unknown;
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

answer_enum! {
    /// What the user wants the assistant to do
    Task as "task" {
        Debugging => "debugging", "Debugging";
        WriteCode => "write-code", "Write Code";
        ExplainCode => "explain-code", "Explain Code";
        Refactor => "refactor", "Refactor";
        AddTests => "add-tests", "Add Tests";
        ArchitectureAdvice => "architecture-advice", "Architecture Advice";
        CodeReview => "code-review", "Code Review";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    Language as "language" {
        JavascriptTypescript => "javascript-typescript", "JavaScript / TypeScript";
        Python => "python", "Python";
        Java => "java", "Java";
        Csharp => "csharp", "C#";
        Go => "go", "Go";
        Rust => "rust", "Rust";
        Php => "php", "PHP";
        Ruby => "ruby", "Ruby";
        Kotlin => "kotlin", "Kotlin";
        Swift => "swift", "Swift";
        Elixir => "elixir", "Elixir";
        Scala => "scala", "Scala";
        Clojure => "clojure", "Clojure";
        Fsharp => "fsharp", "F#";
        Dart => "dart", "Dart";
        Sql => "sql", "SQL";
        Bash => "bash", "Bash / Shell";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    /// UI frameworks; only meaningful for languages that ship to the browser
    FrontendFramework as "front-end framework" {
        React => "react", "React";
        Next => "next", "Next.js";
        Remix => "remix", "Remix";
        Angular => "angular", "Angular";
        Vue => "vue", "Vue";
        Svelte => "svelte", "Svelte";
        Sveltekit => "sveltekit", "SvelteKit";
        Nuxt => "nuxt", "Nuxt";
        Solid => "solid", "SolidJS";
        Qwik => "qwik", "Qwik";
        Astro => "astro", "Astro";
        Ember => "ember", "Ember";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    /// Back-end framework or runtime
    Framework as "framework" {
        Node => "node", "Node.js";
        Deno => "deno", "Deno";
        Bun => "bun", "Bun";
        Express => "express", "Express";
        Fastify => "fastify", "Fastify";
        Nest => "nest", "NestJS";
        Django => "django", "Django";
        Flask => "flask", "Flask";
        Fastapi => "fastapi", "FastAPI";
        Gin => "gin", "Gin";
        Spring => "spring", "Spring";
        Dotnet => "dotnet", ".NET";
        Laravel => "laravel", "Laravel";
        Rails => "rails", "Ruby on Rails";
        Ktor => "ktor", "Ktor";
        Vapor => "vapor", "Vapor";
        Axum => "axum", "Axum";
        Rocket => "rocket", "Rocket";
        Phoenix => "phoenix", "Phoenix";
        Play => "play", "Play";
        Pedestal => "pedestal", "Pedestal";
        Shelf => "shelf", "Shelf";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    Constraint as "constraint" {
        ProjectConventions => "project-conventions", "Follow project conventions";
        AvoidExternalDeps => "avoid-external-deps", "Avoid external dependencies";
        ExplainReasoning => "explain-reasoning", "Explain reasoning";
        TimeSpaceLimits => "time-space-limits", "Time / space limits";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    DetailLevel as "detail level" {
        Concise => "concise", "Concise";
        Detailed => "detailed", "Detailed";
        StepByStep => "step-by-step", "Step-by-step";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    DeliveryOrder as "delivery order" {
        CodeFirst => "code-first", "Code first";
        ExplanationFirst => "explanation-first", "Explanation first";
        Balanced => "balanced", "Balanced";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    /// Include/skip preference shared by example tests and complexity analysis
    Inclusion as "inclusion preference" {
        Include => "include", "Include";
        Omit => "omit", "Skip";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    Tool as "tool" {
        UnitTests => "unit-tests", "Unit tests";
        Linters => "linters", "Linters";
        PackageManagers => "package-managers", "Package managers";
        SpecificLibraries => "specific-libraries", "Specific libraries";
        Unknown => "unknown", "I don't know";
    }
}

answer_enum! {
    /// Model family the prompt will be pasted into
    Target as "target" {
        General => "general", "General compatibility";
        Openai => "openai", "OpenAI (GPT)";
        Anthropic => "anthropic", "Anthropic (Claude)";
        LocalRunner => "local-runner", "Local / self-hosted";
        Unknown => "unknown", "I don't know";
    }
}
