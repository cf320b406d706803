use crate::matmath::{Magnetization,Matrix};
use crate::spin::Relaxation;
// operator splitting for stationary spins: instantaneous rotation, then closed-form
// relaxation of the decoupled Bloch equations

/** Counter-clockwise rotation of (z,xy) by theta radians */
pub fn rot_op(theta:f64) -> Matrix{
    let cosphi = theta.cos();
    let sinphi = theta.sin();
    let mut result = Matrix::zeros();
    result.a.z = cosphi;
    result.a.xy = -sinphi;
    result.b.z = sinphi;
    result.b.xy = cosphi;
    return result;
}

/** Exact solution of dz/dt = (m0 - z)/t1, dxy/dt = -xy/t2 over an interval tau */
pub fn rel_op(mag:Magnetization,relaxation:&Relaxation,tau:f64,m0:f64) -> Magnetization {
    let t_rel = (-tau/relaxation.t2()).exp();
    let l_rel = (-tau/relaxation.t1()).exp();
    let rel = Magnetization::new(l_rel,t_rel);
    let mut m = mag.mul_entries(&rel);
    m.z = m.z + m0*(1.0 - l_rel);
    return m;
}

pub fn transform(mag:Magnetization,theta:f64,relaxation:&Relaxation,m0:f64,tau:f64) -> Magnetization{
    let rotop = rot_op(theta);
    return rel_op(rotop*mag,relaxation,tau,m0);
}
