use skein_model::AdmissionStrategy;
use taskvisor::AdmissionPolicy;

pub fn to_admission_policy(s: AdmissionStrategy) -> AdmissionPolicy {
    match s {
        AdmissionStrategy::DropIfRunning => AdmissionPolicy::DropIfRunning,
        AdmissionStrategy::Replace => AdmissionPolicy::Replace,
        AdmissionStrategy::Queue => AdmissionPolicy::Queue,
    }
}
