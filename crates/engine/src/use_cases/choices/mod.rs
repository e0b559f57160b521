//! Choice use cases.
//!
//! String-id facade over the domain choice rules. Ids are parsed here so an
//! unknown class or race is reported as not found instead of yielding empty
//! requirements.

mod error;

pub use error::ChoiceError;

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use chargen_domain::choices::{
    subclass_conflicts, validate_source, with_duplicate_scan, CharacterRequirements,
    Requirements, Source, Submissions, ValidationContext, ValidationResult,
};
use chargen_domain::{Background, Class, Level, Race, Subclass, Vocabulary};
use chargen_protocol::{ChoiceRequest, ResponseResult};

use crate::config::EngineConfig;
use crate::infrastructure::cache::RequirementsCache;
use crate::infrastructure::catalog::StaticRuleCatalog;
use crate::infrastructure::ports::RuleCatalog;

fn parse_id<T: Vocabulary>(raw: &str) -> Result<T, ChoiceError> {
    raw.parse::<T>().map_err(|_| {
        warn!(kind = T::KIND, id = %raw, "Unknown id in choice request");
        ChoiceError::NotFound {
            kind: T::KIND,
            id: raw.to_string(),
        }
    })
}

fn parse_level(raw: u8) -> Result<Level, ChoiceError> {
    Level::new(raw).map_err(|e| ChoiceError::InvalidRequest(e.to_string()))
}

fn parse_subclass(raw: Option<&str>) -> Result<Option<Subclass>, ChoiceError> {
    raw.map(parse_id::<Subclass>).transpose()
}

/// Requirement lookups and validation keyed by string ids.
pub struct ChoiceService {
    catalog: Arc<dyn RuleCatalog>,
    cache: Option<RequirementsCache>,
    detect_duplicates: bool,
}

impl ChoiceService {
    pub fn new(catalog: Arc<dyn RuleCatalog>, config: &EngineConfig) -> Self {
        Self {
            catalog,
            cache: config.cache_requirements.then(RequirementsCache::new),
            detect_duplicates: config.detect_duplicates,
        }
    }

    /// Service over the built-in rule tables.
    pub fn with_static_catalog(config: &EngineConfig) -> Self {
        Self::new(Arc::new(StaticRuleCatalog), config)
    }

    fn lookup_class(
        &self,
        class: Class,
        level: Level,
        subclass: Option<Subclass>,
    ) -> Result<Requirements, ChoiceError> {
        let compute = || -> Result<Requirements, ChoiceError> {
            match subclass {
                Some(subclass) => Ok(self
                    .catalog
                    .class_requirements_with_subclass(class, level, subclass)?),
                None => Ok(self.catalog.class_requirements(class, level)),
            }
        };
        match &self.cache {
            Some(cache) => cache.get_or_try_insert_with((class, level, subclass), compute),
            None => compute(),
        }
    }

    #[instrument(skip(self))]
    pub fn class_requirements(
        &self,
        class: &str,
        level: u8,
        subclass: Option<&str>,
    ) -> Result<Requirements, ChoiceError> {
        let class = parse_id::<Class>(class)?;
        let level = parse_level(level)?;
        let subclass = parse_subclass(subclass)?;
        self.lookup_class(class, level, subclass)
    }

    #[instrument(skip(self))]
    pub fn race_requirements(&self, race: &str) -> Result<Requirements, ChoiceError> {
        let race = parse_id::<Race>(race)?;
        Ok(self.catalog.race_requirements(race))
    }

    #[instrument(skip(self))]
    pub fn background_requirements(&self, background: &str) -> Result<Requirements, ChoiceError> {
        let background = parse_id::<Background>(background)?;
        Ok(self.catalog.background_requirements(background))
    }

    /// Per-source requirements for a whole character.
    #[instrument(skip(self))]
    pub fn requirements(
        &self,
        class: &str,
        race: &str,
        background: &str,
        level: u8,
        subclass: Option<&str>,
    ) -> Result<CharacterRequirements, ChoiceError> {
        Ok(CharacterRequirements {
            class: self.class_requirements(class, level, subclass)?,
            race: self.race_requirements(race)?,
            background: self.background_requirements(background)?,
        })
    }

    /// Class validation against the catalog's (possibly cached) tables.
    fn check_class(
        &self,
        class: Class,
        level: Level,
        subclass: Option<Subclass>,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> Result<ValidationResult, ChoiceError> {
        let reqs = self.lookup_class(class, level, subclass)?;
        let grants = self.catalog.class_grants(class, level, subclass);
        let mut result = validate_source(Source::Class, &reqs, &grants, submissions, context);
        if let Some(subclass) = subclass {
            result.extend(subclass_conflicts(class, subclass, submissions));
        }
        Ok(result)
    }

    fn check_race(
        &self,
        race: Race,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> ValidationResult {
        let reqs = self.catalog.race_requirements(race);
        let grants = self.catalog.race_grants(race);
        validate_source(Source::Race, &reqs, &grants, submissions, context)
    }

    fn check_background(
        &self,
        background: Background,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> ValidationResult {
        let reqs = self.catalog.background_requirements(background);
        let grants = self.catalog.background_grants(background);
        validate_source(Source::Background, &reqs, &grants, submissions, context)
    }

    #[instrument(skip(self, submissions, context), fields(submissions = submissions.len()))]
    pub fn validate_class_choices(
        &self,
        class: &str,
        level: u8,
        subclass: Option<&str>,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> Result<ValidationResult, ChoiceError> {
        let class = parse_id::<Class>(class)?;
        let level = parse_level(level)?;
        let subclass = parse_subclass(subclass)?;
        self.check_class(class, level, subclass, submissions, context)
    }

    #[instrument(skip(self, submissions, context), fields(submissions = submissions.len()))]
    pub fn validate_race_choices(
        &self,
        race: &str,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> Result<ValidationResult, ChoiceError> {
        let race = parse_id::<Race>(race)?;
        Ok(self.check_race(race, submissions, context))
    }

    #[instrument(skip(self, submissions, context), fields(submissions = submissions.len()))]
    pub fn validate_background_choices(
        &self,
        background: &str,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> Result<ValidationResult, ChoiceError> {
        let background = parse_id::<Background>(background)?;
        Ok(self.check_background(background, submissions, context))
    }

    /// Validates every source. The duplicate scan follows the configuration.
    #[instrument(skip(self, submissions, context), fields(submissions = submissions.len()))]
    pub fn validate(
        &self,
        class: &str,
        race: &str,
        background: &str,
        level: u8,
        subclass: Option<&str>,
        submissions: &Submissions,
        context: Option<&ValidationContext>,
    ) -> Result<ValidationResult, ChoiceError> {
        let class = parse_id::<Class>(class)?;
        let race = parse_id::<Race>(race)?;
        let background = parse_id::<Background>(background)?;
        let level = parse_level(level)?;
        let subclass = parse_subclass(subclass)?;

        let mut grants = self.catalog.race_grants(race);
        grants.extend(self.catalog.background_grants(background));
        grants.extend(self.catalog.class_grants(class, level, subclass));
        let mut ctx = context.cloned().unwrap_or_default();
        ctx.add_grants(&grants);

        let mut result = self.check_class(class, level, subclass, submissions, Some(&ctx))?;
        result.merge(self.check_race(race, submissions, Some(&ctx)));
        result.merge(self.check_background(background, submissions, Some(&ctx)));

        if self.detect_duplicates {
            grants.extend(context.map(ValidationContext::grants).unwrap_or_default());
            result = with_duplicate_scan(result, submissions, &grants);
        }
        debug!(
            class = %class,
            race = %race,
            background = %background,
            can_save = result.can_save,
            can_finalize = result.can_finalize,
            "Validated character choices"
        );
        Ok(result)
    }

    /// Dispatches a wire request and wraps the outcome.
    pub fn handle(&self, request: ChoiceRequest) -> ResponseResult {
        let operation = request.operation();
        let outcome = self.dispatch(request);
        match outcome {
            Ok(response) => {
                debug!(operation, "Choice request handled");
                response
            }
            Err(err) => {
                debug!(operation, error = %err, "Choice request failed");
                ResponseResult::error(err.code(), err.to_string())
            }
        }
    }

    fn dispatch(&self, request: ChoiceRequest) -> Result<ResponseResult, ChoiceError> {
        let response = match request {
            ChoiceRequest::GetClassRequirements {
                class,
                level,
                subclass,
            } => ResponseResult::success(self.class_requirements(
                &class,
                level,
                subclass.as_deref(),
            )?),
            ChoiceRequest::GetRaceRequirements { race } => {
                ResponseResult::success(self.race_requirements(&race)?)
            }
            ChoiceRequest::GetBackgroundRequirements { background } => {
                ResponseResult::success(self.background_requirements(&background)?)
            }
            ChoiceRequest::GetRequirements {
                class,
                race,
                background,
                level,
                subclass,
            } => ResponseResult::success(self.requirements(
                &class,
                &race,
                &background,
                level,
                subclass.as_deref(),
            )?),
            ChoiceRequest::ValidateClassChoices {
                class,
                level,
                subclass,
                submissions,
                context,
            } => ResponseResult::success(self.validate_class_choices(
                &class,
                level,
                subclass.as_deref(),
                &submissions,
                context.as_ref(),
            )?),
            ChoiceRequest::ValidateRaceChoices {
                race,
                submissions,
                context,
            } => ResponseResult::success(self.validate_race_choices(
                &race,
                &submissions,
                context.as_ref(),
            )?),
            ChoiceRequest::ValidateBackgroundChoices {
                background,
                submissions,
                context,
            } => ResponseResult::success(self.validate_background_choices(
                &background,
                &submissions,
                context.as_ref(),
            )?),
            ChoiceRequest::Validate {
                class,
                race,
                background,
                level,
                subclass,
                submissions,
                context,
            } => ResponseResult::success(self.validate(
                &class,
                &race,
                &background,
                level,
                subclass.as_deref(),
                &submissions,
                context.as_ref(),
            )?),
        };
        Ok(response)
    }
}
