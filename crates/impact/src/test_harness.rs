//! Headless App wrapping [`ImpactPlugin`] for integration tests.

use bevy::prelude::*;

use crate::{Evaluation, ImpactPlugin, Locale, ParameterKey, ParameterSet};

pub struct TestImpact {
    app: App,
}

impl TestImpact {
    /// Build the app and run the first update.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ImpactPlugin);
        app.update();
        Self { app }
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    pub fn set_param(&mut self, key: ParameterKey, value: f64) -> &mut Self {
        self.app
            .world_mut()
            .resource_mut::<ParameterSet>()
            .set(key, value);
        self
    }

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        self.app.insert_resource(locale);
        self
    }

    pub fn evaluation(&self) -> &Evaluation {
        self.app.world().resource::<Evaluation>()
    }

    pub fn revision(&self) -> u64 {
        self.evaluation().revision
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
