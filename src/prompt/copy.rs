//! Sentences the prompt is assembled from, one per answer value.

use crate::schema::{
    Constraint, DeliveryOrder, DetailLevel, Framework, FrontendFramework, Inclusion, Language,
    Target, Task, Tool,
};

pub const ROLE: &str = "You are an expert AI coding assistant.";

pub const NO_FRONTEND: &str =
    "Front-end stack not specified. Confirm whether a dedicated UI framework is required.";

pub const NO_CONTEXT: &str =
    "Context not provided yet. Ask for architecture, requirements, and failure modes before proceeding.";

pub const NO_SNIPPET: &str = "_(Add relevant code snippets or stack traces when available.)_";

pub const NO_CONSTRAINTS: &str =
    "No constraints were supplied. Ask the user about coding standards or delivery expectations.";

pub const NO_TOOLS: &str =
    "Tools are unspecified. Confirm whether tests, linters, or package managers are available.";

pub const SURFACE_UNCERTAINTY: &str =
    "Surface uncertainties and ask clarifying questions before assuming details.";

pub const STRUCTURED_RESPONSE: &str = "Deliver a structured response with clear section headings.";

pub const TRADE_OFFS: &str = "Highlight any trade-offs or alternatives considered.";

pub fn task(value: Task) -> &'static str {
    match value {
        Task::Debugging => {
            "Investigate the reported defect, explain the root cause, and propose a safe fix."
        }
        Task::WriteCode => {
            "Design and implement the requested functionality with production quality in mind."
        }
        Task::ExplainCode => {
            "Explain the referenced code clearly, highlighting intent and potential pitfalls."
        }
        Task::Refactor => "Refactor the existing code to improve structure, readability, and maintainability without changing behavior.",
        Task::AddTests => "Add comprehensive automated tests that cover critical paths and edge cases.",
        Task::ArchitectureAdvice => {
            "Provide architectural guidance, trade-offs, and recommended patterns."
        }
        Task::CodeReview => {
            "Review the provided changes, assess risks, and suggest actionable improvements."
        }
        Task::Unknown => {
            "Clarify the user's goal and outline the safest approach before proceeding."
        }
    }
}

pub fn language(value: Language) -> &'static str {
    match value {
        Language::JavascriptTypescript => "Focus on TypeScript/JavaScript best practices. If unsure, default to TypeScript.",
        Language::Python => "Use idiomatic Python 3. Avoid unnecessary third-party packages.",
        Language::Java => "Target Java 21+ conventions with clear class and method documentation.",
        Language::Csharp => "Write modern C# targeting .NET 8 patterns and nullable reference types.",
        Language::Go => "Produce Go 1.22 compliant code with emphasis on simplicity and clarity.",
        Language::Rust => "Favor safe Rust patterns and highlight ownership or borrowing nuances.",
        Language::Php => "Lean on PHP 8.3 features and PSR standards. Highlight framework conventions when relevant.",
        Language::Ruby => "Write Ruby 3.3 code with clear metaprogramming notes and emphasize readability.",
        Language::Kotlin => "Use Kotlin targeting the latest JVM tooling with null-safety and coroutine best practices.",
        Language::Swift => "Produce Swift 6 code mindful of concurrency best practices and Apple platform guidelines.",
        Language::Elixir => "Target Elixir 1.17 with OTP patterns. Highlight concurrency via processes and Supervisors.",
        Language::Scala => "Apply Scala 3 idioms with strong typing, pattern matching, and functional cores.",
        Language::Clojure => "Focus on Clojure with immutable data, REPL-driven workflows, and JVM interop notes.",
        Language::Fsharp => "Write F# 8 with emphasis on functional-first patterns and type inference.",
        Language::Dart => "Use Dart 3 with null safety and structured async/await for Flutter or server apps.",
        Language::Sql => "Provide SQL that is portable across common relational databases.",
        Language::Bash => "Deliver POSIX-friendly shell scripts and note platform caveats when applicable.",
        Language::Unknown => "Language is unspecified. Confirm with the user; suggest TypeScript as a safe default if they defer.",
    }
}

pub fn frontend_framework(value: FrontendFramework) -> &'static str {
    match value {
        FrontendFramework::React => "Use modern React with hooks, suspense, and component composition.",
        FrontendFramework::Next => "Follow Next.js 15 conventions with server actions and app router best practices.",
        FrontendFramework::Remix => "Adopt Remix loaders/actions with progressive enhancement and web fundamentals.",
        FrontendFramework::Angular => "Target Angular 19 with standalone components, signals, and typed reactive forms.",
        FrontendFramework::Vue => "Use Vue 3 composition API, `<script setup>`, and single-file component patterns.",
        FrontendFramework::Svelte => "Write Svelte 5 components leveraging stores, reactivity, and compile-time optimizations.",
        FrontendFramework::Sveltekit => "Structure SvelteKit apps with filesystem routing, load functions, and server endpoints.",
        FrontendFramework::Nuxt => "Follow Nuxt 3 patterns with composables, Nitro server routes, and hybrid rendering.",
        FrontendFramework::Solid => "Use SolidStart and fine-grained reactivity for performant UI components.",
        FrontendFramework::Qwik => "Embrace Qwik's resumability model with lazy-loaded, fine-grained components.",
        FrontendFramework::Astro => "Compose Astro islands, partial hydration, and integration-friendly component slots.",
        FrontendFramework::Ember => "Adhere to Ember Octane conventions with autotracking, Glimmer components, and Ember Data.",
        FrontendFramework::Unknown => "Front-end stack is unclear. Confirm whether the UI requires React, Vue, or another framework.",
    }
}

pub fn framework(value: Framework) -> &'static str {
    match value {
        Framework::Node => "Assume a Node.js runtime (LTS). Mind asynchronous flows and dependency hygiene.",
        Framework::Deno => "Target Deno with native tooling and permissions constraints.",
        Framework::Bun => "Optimize for Bun's runtime and package runner capabilities.",
        Framework::Express => "Build on Express.js with middleware and routing best practices. Emphasize error handling.",
        Framework::Fastify => "Use Fastify's plugin architecture and schema-driven validation for performance-sensitive APIs.",
        Framework::Nest => "Follow NestJS modular structure with decorators, DI containers, and TypeScript-first patterns.",
        Framework::Django => "Adhere to Django 5 best practices and built-in security safeguards.",
        Framework::Flask => "Structure Flask apps with blueprints and configuration separation.",
        Framework::Fastapi => "Rely on FastAPI with Pydantic models, dependency injection, and async I/O.",
        Framework::Gin => "Build Go services using Gin with middleware and context-aware routing.",
        Framework::Spring => "Use Spring Boot 3 idioms and highlight dependency management.",
        Framework::Dotnet => ".NET runtime assumed. Prefer minimal APIs and dependency injection.",
        Framework::Laravel => "Use Laravel 11 conventions with Eloquent models, service containers, and queues.",
        Framework::Rails => "Target Ruby on Rails 8 conventions emphasizing MVC structure and Active Record patterns.",
        Framework::Ktor => "Use Ktor with coroutines, typed routes, and Gradle-based configuration.",
        Framework::Vapor => "Adopt Vapor 4 conventions with Fluent ORM and async HTTP handling.",
        Framework::Axum => "Use Axum with Tower middleware, async handlers, and type-safe extractors.",
        Framework::Rocket => "Follow Rocket's request guards, responders, and async support for ergonomic routing.",
        Framework::Phoenix => "Build Elixir services on Phoenix with LiveView, Ecto, and OTP supervision strategies.",
        Framework::Play => "Use Play Framework for Scala with typed routing, controllers, and Akka-based concurrency.",
        Framework::Pedestal => "Structure Pedestal services with interceptors, immutability, and REPL-driven workflows.",
        Framework::Shelf => "Serve Dart applications via Shelf with middleware, async handlers, and isolates.",
        Framework::Unknown => "Framework/runtime not specified. Ask for clarification or assume a lightweight runtime temporarily.",
    }
}

pub fn constraint(value: Constraint) -> &'static str {
    match value {
        Constraint::ProjectConventions => "Follow existing project conventions and style guidelines.",
        Constraint::AvoidExternalDeps => {
            "Avoid adding new external dependencies unless absolutely required."
        }
        Constraint::ExplainReasoning => {
            "Explain reasoning behind key decisions so the reader can follow the logic."
        }
        Constraint::TimeSpaceLimits => {
            "Respect time/space constraints and call them out if they are at risk."
        }
        Constraint::Unknown => "Clarify constraints with the user. Suggest verifying coding standards and dependency policies.",
    }
}

pub fn tool(value: Tool) -> &'static str {
    match value {
        Tool::UnitTests => "Unit tests may be executed to validate behavior.",
        Tool::Linters => "Linters or static analysis tools are allowed to verify conventions.",
        Tool::PackageManagers => {
            "Package managers (npm, pip, etc.) can be used for installation tasks."
        }
        Tool::SpecificLibraries => "Specific libraries are permitted when they accelerate delivery.",
        Tool::Unknown => "Confirm which tools and services are allowed before relying on them.",
    }
}

pub fn detail_level(value: DetailLevel) -> &'static str {
    match value {
        DetailLevel::Concise => "Keep responses lean and outcome-focused.",
        DetailLevel::Detailed => "Provide thorough explanations and implementation notes.",
        DetailLevel::StepByStep => "Respond with a numbered, step-by-step plan before final output.",
        DetailLevel::Unknown => "Detail level is unspecified. Ask whether a quick summary or in-depth answer is preferred.",
    }
}

pub fn delivery_order(value: DeliveryOrder) -> &'static str {
    match value {
        DeliveryOrder::CodeFirst => "Present final code before explanations.",
        DeliveryOrder::ExplanationFirst => "Explain the approach before presenting code.",
        DeliveryOrder::Balanced => {
            "Balance code and explanations by interleaving rationale with snippets."
        }
        DeliveryOrder::Unknown => {
            "Clarify whether code or narrative should take priority for this user."
        }
    }
}

pub fn example_tests(value: Inclusion) -> &'static str {
    match value {
        Inclusion::Include => "Include example tests illustrating the solution.",
        Inclusion::Omit => "Only mention tests if they are critical.",
        Inclusion::Unknown => "Ask whether example tests would be helpful before generating them.",
    }
}

pub fn complexity_analysis(value: Inclusion) -> &'static str {
    match value {
        Inclusion::Include => "Provide complexity analysis for key algorithms.",
        Inclusion::Omit => "Skip complexity analysis unless specifically requested.",
        Inclusion::Unknown => "Confirm if complexity analysis is needed for this audience.",
    }
}

/// Output-format bullet that depends on delivery order
pub fn output_order(value: DeliveryOrder) -> &'static str {
    match value {
        DeliveryOrder::CodeFirst => {
            "Present the final solution code first, followed by supporting explanation."
        }
        DeliveryOrder::ExplanationFirst => "Explain the approach before listing final code.",
        DeliveryOrder::Balanced | DeliveryOrder::Unknown => {
            "Interleave explanations with code snippets for readability."
        }
    }
}

/// Test-case section body; `None` when tests were explicitly skipped
pub fn test_cases(value: Inclusion) -> Option<&'static str> {
    match value {
        Inclusion::Include => Some(
            "Provide runnable example tests that demonstrate expected behavior and edge cases.",
        ),
        Inclusion::Unknown => Some(
            "Clarify with the user whether example tests are desired before generating them.",
        ),
        Inclusion::Omit => None,
    }
}

pub fn target(value: Target) -> &'static str {
    match value {
        Target::General => "Compatible with most coding LLMs.",
        Target::Openai => "Optimized for OpenAI GPT-4/GPT-4.1.",
        Target::Anthropic => "Optimized for Anthropic Claude models.",
        Target::LocalRunner => "Optimized for local/self-hosted coding agents.",
        Target::Unknown => "Confirm model/agent expectations with the user.",
    }
}
