//! The register service

use tracing::{debug, info};

use riskledger_config::ScoringConfig;
use riskledger_core::{
    is_valid_rating, Countermeasure, ImpactAssessment, LikelihoodAssessment, Result,
    RiskCalculation, RiskDataset, RiskError, RiskMatrix, RiskSummary, Threat,
};
use riskledger_store::{clear_all, load_dataset, save_dataset, Store};

use crate::drafts::{CountermeasureDraft, ThreatDraft};

/// The risk register: five collections, one mutation path.
///
/// Generic over the store backend; every mutation validates, applies,
/// rebuilds the derived risk records, and mirrors the dataset to the store.
///
/// # Examples
///
/// ```
/// use riskledger_register::{RiskRegister, ThreatDraft};
/// use riskledger_store::MemoryStore;
/// use riskledger_core::{ThreatCategory, ThreatStatus};
/// use chrono::NaiveDate;
///
/// let mut register = RiskRegister::open(MemoryStore::new());
/// let id = register.add_threat(ThreatDraft {
///     name: "Misconfigured Web Application Firewall".into(),
///     description: "WAF misconfiguration enabling SSRF attacks".into(),
///     category: ThreatCategory::CloudInfrastructure,
///     owner: "Cloud Security Team".into(),
///     date_identified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     status: ThreatStatus::Open,
/// }).unwrap();
/// assert_eq!(id, "T001");
/// ```
pub struct RiskRegister<S: Store> {
    store: S,
    config: ScoringConfig,
    dataset: RiskDataset,
}

impl<S: Store> RiskRegister<S> {
    /// Opens a register over a store with the canonical scoring config.
    pub fn open(store: S) -> Self {
        Self::open_with_config(store, ScoringConfig::default())
            .expect("default scoring config is valid")
    }

    /// Opens a register over a store with a custom scoring config.
    ///
    /// The config is validated up front; loaded derived records are rebuilt
    /// under it so a threshold change reclassifies persisted risks.
    pub fn open_with_config(store: S, config: ScoringConfig) -> Result<Self> {
        config
            .weights
            .validate()
            .and_then(|()| config.thresholds.validate())?;

        let dataset = load_dataset(&store, RiskDataset::new());
        let mut register = RiskRegister {
            store,
            config,
            dataset,
        };
        register.recalculate();
        info!(
            threats = register.dataset.threats.len(),
            "risk register opened"
        );
        Ok(register)
    }

    /// The current dataset.
    pub fn dataset(&self) -> &RiskDataset {
        &self.dataset
    }

    /// The scoring configuration in effect.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Recorded threats, in creation order.
    pub fn threats(&self) -> &[Threat] {
        &self.dataset.threats
    }

    /// Impact assessments, one per assessed threat.
    pub fn impact_assessments(&self) -> &[ImpactAssessment] {
        &self.dataset.impact_assessments
    }

    /// Likelihood assessments, one per assessed threat.
    pub fn likelihood_assessments(&self) -> &[LikelihoodAssessment] {
        &self.dataset.likelihood_assessments
    }

    /// Derived risk records, in threat order.
    pub fn risk_calculations(&self) -> &[RiskCalculation] {
        &self.dataset.risk_calculations
    }

    /// Recorded countermeasures, one per mitigated threat.
    pub fn countermeasures(&self) -> &[Countermeasure] {
        &self.dataset.countermeasures
    }

    /// Records a new threat and returns its generated id.
    pub fn add_threat(&mut self, draft: ThreatDraft) -> Result<String> {
        draft.validate()?;

        let id = self.next_threat_id();
        self.dataset.threats.push(Threat {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            owner: draft.owner,
            date_identified: draft.date_identified,
            status: draft.status,
        });
        info!(threat_id = %id, "threat added");
        self.commit();
        Ok(id)
    }

    /// Replaces the fields of an existing threat, keeping its id.
    pub fn update_threat(&mut self, id: &str, draft: ThreatDraft) -> Result<()> {
        draft.validate()?;

        let threat = self
            .dataset
            .threats
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| RiskError::UnknownThreat(id.to_string()))?;
        threat.name = draft.name;
        threat.description = draft.description;
        threat.category = draft.category;
        threat.owner = draft.owner;
        threat.date_identified = draft.date_identified;
        threat.status = draft.status;
        info!(threat_id = %id, "threat updated");
        self.commit();
        Ok(())
    }

    /// Deletes a threat and everything recorded against it.
    ///
    /// Assessments and countermeasures cascade; the derived risk record
    /// drops out of the rebuild. A threat with no associated records leaves
    /// the other collections untouched.
    pub fn delete_threat(&mut self, id: &str) -> Result<()> {
        if self.dataset.threat(id).is_none() {
            return Err(RiskError::UnknownThreat(id.to_string()));
        }

        self.dataset.threats.retain(|t| t.id != id);
        self.dataset
            .impact_assessments
            .retain(|a| a.threat_id != id);
        self.dataset
            .likelihood_assessments
            .retain(|a| a.threat_id != id);
        self.dataset.countermeasures.retain(|c| c.threat_id != id);
        info!(threat_id = %id, "threat deleted");
        self.commit();
        Ok(())
    }

    /// Records or replaces the impact assessment for a threat.
    pub fn assess_impact(
        &mut self,
        threat_id: &str,
        financial: u8,
        reputational: u8,
        operational: u8,
        regulatory: u8,
    ) -> Result<()> {
        self.require_threat(threat_id)?;
        for (dimension, value) in [
            ("financial", financial),
            ("reputational", reputational),
            ("operational", operational),
            ("regulatory", regulatory),
        ] {
            if !is_valid_rating(value) {
                return Err(RiskError::RatingOutOfRange { dimension, value });
            }
        }

        let assessment = ImpactAssessment::new(
            threat_id,
            financial,
            reputational,
            operational,
            regulatory,
            &self.config.weights,
        );
        upsert(
            &mut self.dataset.impact_assessments,
            assessment,
            |a| a.threat_id == threat_id,
        );
        info!(threat_id = %threat_id, "impact assessment recorded");
        self.commit();
        Ok(())
    }

    /// Records or replaces the likelihood assessment for a threat.
    pub fn assess_likelihood(
        &mut self,
        threat_id: &str,
        actor_capability: u8,
        opportunity: u8,
        historical_precedent: u8,
    ) -> Result<()> {
        self.require_threat(threat_id)?;
        for (dimension, value) in [
            ("actor capability", actor_capability),
            ("opportunity", opportunity),
            ("historical precedent", historical_precedent),
        ] {
            if !is_valid_rating(value) {
                return Err(RiskError::RatingOutOfRange { dimension, value });
            }
        }

        let assessment = LikelihoodAssessment::new(
            threat_id,
            actor_capability,
            opportunity,
            historical_precedent,
        );
        upsert(
            &mut self.dataset.likelihood_assessments,
            assessment,
            |a| a.threat_id == threat_id,
        );
        info!(threat_id = %threat_id, "likelihood assessment recorded");
        self.commit();
        Ok(())
    }

    /// Records or replaces the countermeasure for a threat.
    ///
    /// The residual is computed from the threat's current total risk score,
    /// so the threat must already have both assessments.
    pub fn record_countermeasure(
        &mut self,
        threat_id: &str,
        draft: CountermeasureDraft,
    ) -> Result<()> {
        self.require_threat(threat_id)?;
        draft.validate()?;

        let total = self
            .dataset
            .risk_calculation(threat_id)
            .map(|r| r.total_risk_score)
            .ok_or_else(|| RiskError::MissingRiskCalculation(threat_id.to_string()))?;

        let countermeasure = Countermeasure::new(
            threat_id,
            draft.description,
            draft.control_function,
            draft.implementation_timeline,
            draft.estimated_cost,
            draft.effectiveness_percent,
            total,
        );
        upsert(
            &mut self.dataset.countermeasures,
            countermeasure,
            |c| c.threat_id == threat_id,
        );
        info!(threat_id = %threat_id, "countermeasure recorded");
        self.commit();
        Ok(())
    }

    /// Removes the countermeasure recorded for a threat.
    pub fn delete_countermeasure(&mut self, threat_id: &str) -> Result<()> {
        let before = self.dataset.countermeasures.len();
        self.dataset
            .countermeasures
            .retain(|c| c.threat_id != threat_id);
        if self.dataset.countermeasures.len() == before {
            return Err(RiskError::MissingCountermeasure(threat_id.to_string()));
        }
        info!(threat_id = %threat_id, "countermeasure deleted");
        self.commit();
        Ok(())
    }

    /// Counts of risks per severity tier.
    pub fn summary(&self) -> RiskSummary {
        RiskSummary::of(&self.dataset.risk_calculations)
    }

    /// Up to `n` risks, highest total score first.
    pub fn top_risks(&self, n: usize) -> Vec<&RiskCalculation> {
        riskledger_core::top_risks(&self.dataset.risk_calculations, n)
    }

    /// The 5x5 likelihood-by-impact distribution.
    pub fn matrix(&self) -> RiskMatrix {
        RiskMatrix::of(&self.dataset.risk_calculations)
    }

    /// Drops every record and clears the store.
    pub fn clear(&mut self) {
        self.dataset = RiskDataset::new();
        clear_all(&self.store);
        info!("risk register cleared");
    }

    fn require_threat(&self, id: &str) -> Result<()> {
        if self.dataset.threat(id).is_none() {
            return Err(RiskError::UnknownThreat(id.to_string()));
        }
        Ok(())
    }

    /// Next sequential id, skipping any id still in use after deletions.
    fn next_threat_id(&self) -> String {
        let mut index = self.dataset.threats.len() + 1;
        loop {
            let id = format!("T{:03}", index);
            if self.dataset.threat(&id).is_none() {
                return id;
            }
            index += 1;
        }
    }

    /// Rebuilds derived records and mirrors every collection to the store.
    fn commit(&mut self) {
        self.recalculate();
        save_dataset(&self.store, &self.dataset);
    }

    /// Rebuilds risk calculations by joining threats with both assessments,
    /// then refreshes countermeasure residuals against the new totals.
    fn recalculate(&mut self) {
        let mut calculations = Vec::new();
        for threat in &self.dataset.threats {
            let impact = self.dataset.impact_assessment(&threat.id);
            let likelihood = self.dataset.likelihood_assessment(&threat.id);
            if let (Some(impact), Some(likelihood)) = (impact, likelihood) {
                calculations.push(RiskCalculation::derive(
                    threat,
                    impact,
                    likelihood,
                    &self.config.thresholds,
                ));
            }
        }
        self.dataset.risk_calculations = calculations;

        for countermeasure in &mut self.dataset.countermeasures {
            if let Some(risk) = self
                .dataset
                .risk_calculations
                .iter()
                .find(|r| r.threat_id == countermeasure.threat_id)
            {
                *countermeasure = Countermeasure::new(
                    countermeasure.threat_id.clone(),
                    countermeasure.description.clone(),
                    countermeasure.control_function,
                    countermeasure.implementation_timeline.clone(),
                    countermeasure.estimated_cost.clone(),
                    countermeasure.effectiveness_percent,
                    risk.total_risk_score,
                );
            }
        }

        debug!(
            count = self.dataset.risk_calculations.len(),
            "risk calculations rebuilt"
        );
    }
}

/// Replaces the first record matching the predicate, or appends.
fn upsert<T>(records: &mut Vec<T>, record: T, matches: impl Fn(&T) -> bool) {
    match records.iter().position(|r| matches(r)) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}
