use std::f64::consts::PI;
use spin_sim::sequence::EchoTrainParams;
use spin_sim::{PulseSequence, SpinEnsemble};

/// the echo train written out as direct calls on the ensemble
fn scripted(t1:f64,t2:f64) -> SpinEnsemble {
    let t180 = PI*1.1;
    let t90 = t180/2.0;
    let mut ens = SpinEnsemble::new(t1,t2).unwrap();
    ens.record();
    ens.pulse(t90);
    ens.record();
    ens.multi_relax(8,1.0,true);
    ens.pulse(t180);
    ens.record();
    for _ in 0..10 {
        ens.multi_relax(16,1.0,true);
        ens.pulse(t180);
        ens.record();
    }
    ens
}

#[test]
fn echo_train_matches_script() {
    let expected = scripted(20.0,60.0);
    let mut ens = SpinEnsemble::new(20.0,60.0).unwrap();
    PulseSequence::echo_train(&EchoTrainParams::default()).run(&mut ens);

    assert_eq!(ens.trajectory().len(),181);
    assert_eq!(ens.z_history().len(),ens.xy_history().len());
    assert!(ens.state().approx_eq(&expected.state(),1e-12),"{} vs {}",ens.state(),expected.state());
    for (a,b) in ens.trajectory().snapshots().iter().zip(expected.trajectory().snapshots()) {
        assert!(a.magnetization().approx_eq(&b.magnetization(),1e-12));
        assert_eq!(a.time,b.time);
    }
    assert_eq!(ens.elapsed(),168.0);
}

#[test]
fn first_samples_bracket_excitation() {
    let ens = scripted(20.0,60.0);
    let z = ens.z_history();
    let xy = ens.xy_history();
    assert_eq!((z[0],xy[0]),(1.0,0.0));
    assert!((z[1] - (PI*0.55).cos()).abs() < 1e-12);
    assert!((xy[1] - (PI*0.55).sin()).abs() < 1e-12);
}

#[test]
fn long_wait_returns_to_equilibrium() {
    let mut ens = scripted(20.0,60.0);
    let before = ens.trajectory().len();
    ens.multi_relax(5,20.0*60.0/5.0,false);
    assert_eq!(ens.trajectory().len(),before);
    assert!((ens.mz() - 1.0).abs() < 1e-8,"mz = {}",ens.mz());
    assert!(ens.mxy().abs() < 1e-8,"mxy = {}",ens.mxy());
}
