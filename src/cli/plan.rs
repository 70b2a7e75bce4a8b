use crate::brew::{BumpRequest, LivecheckQuery};
use crate::config::Inputs;
use crate::domain::{compose_message, normalize_tag, qualify, split_formula_list};
use crate::error::{BumpError, Result};

/// What a run will do, decided from the inputs before anything external runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Bump one formula to the given version/url/tag.
    Explicit(BumpRequest),

    /// Ask livecheck for outdated formulae and bump each one.
    Livecheck {
        query: LivecheckQuery,
        force: bool,
        message: String,
    },
}

impl Plan {
    /// Validates the inputs and builds the plan for the selected mode.
    ///
    /// # Returns
    /// * `Ok(Plan)` - The plan to execute
    /// * `Err(BumpError::Config)` - If explicit-mode inputs are missing or contradictory
    pub fn from_inputs(inputs: &Inputs) -> Result<Plan> {
        let message = compose_message(inputs.message.as_deref());
        let tap = inputs.tap.as_deref();

        if inputs.livecheck {
            let formulae = inputs
                .formula
                .as_deref()
                .map(|list| split_formula_list(list, tap))
                .unwrap_or_default();
            return Ok(Plan::Livecheck {
                query: LivecheckQuery {
                    formulae,
                    tap: inputs.tap.clone(),
                },
                force: inputs.force,
                message,
            });
        }

        let formula = inputs
            .formula
            .as_deref()
            .ok_or_else(|| BumpError::config("formula is required"))?;

        if inputs.version.is_none() && inputs.url.is_none() && inputs.tag.is_none() {
            return Err(BumpError::config(
                "one of version, url or tag is required",
            ));
        }

        if inputs.tag.is_some() && inputs.revision.is_none() {
            return Err(BumpError::config("revision is required when tag is set"));
        }

        Ok(Plan::Explicit(BumpRequest {
            formula: qualify(tap, formula),
            version: inputs.version.clone(),
            url: inputs.url.clone(),
            tag: inputs.tag.as_deref().map(|t| normalize_tag(t).to_string()),
            revision: inputs.revision.clone(),
            force: inputs.force,
            message,
        }))
    }
}
